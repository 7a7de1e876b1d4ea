// fields.rs
//
// One extractor per record field. Label-keyed fields share the same walk:
// find the label inside the detail table, step to the cell next to it, take
// its text, then hand it to the matching parser in `patterns`.

use super::detail_table::DetailTable;
use super::extract_error::{ExtractError, Field};
use super::patterns;
use crate::document::{DomNode, Query};
use chrono::{DateTime, FixedOffset};
use std::fmt;
use tracing::{debug, warn};

const POSTING_DATE_MARKER: &str = "情報提供日";

/// Class of the `<div>` holding a label inside a `<th>`.
const LABEL_CLASS: &str = "fl";

const NAME_LABEL: &str = "物件名";
const PRICE_LABEL: &str = "価格";
const FLOOR_PLAN_LABEL: &str = "間取り";
const LAND_AREA_LABEL: &str = "土地面積";
const BUILDING_AREA_LABEL: &str = "建物面積";
const CONSTRUCTION_DATE_LABEL: &str = "築年月";
const ADDRESS_LABEL: &str = "住所";
const TRAFFIC_LABEL: &str = "交通";

const YEN: &str = "円";

pub fn extract_id(url: &str) -> Result<String, ExtractError> {
    let id = patterns::parse_listing_id(url).ok_or_else(|| ExtractError::UrlFormat {
        url: url.to_string(),
    })?;
    debug!(%id, "extracted id");
    Ok(id)
}

/// Read from the whole page; the posting date sits outside the detail table.
pub fn extract_posting_date<N: DomNode>(root: &N) -> Result<DateTime<FixedOffset>, ExtractError> {
    let query = Query::tag("p").containing(POSTING_DATE_MARKER);
    let text = root
        .find_first(&query)
        .ok_or_else(|| ExtractError::structure(Field::PostingDate, query))?
        .text();

    let date = patterns::parse_posting_line(&text)
        .map_err(|reason| ExtractError::value(Field::PostingDate, text.trim(), reason))?;
    debug!(%date, "extracted posting date");
    Ok(date)
}

/// Every `<td>` in the label's row, so a name split across cells stays whole.
pub fn extract_name<N: DomNode>(table: &DetailTable<N>) -> Result<String, ExtractError> {
    let query = Query::class(LABEL_CLASS).containing(NAME_LABEL);
    let row = table
        .find_first(&query)
        .ok_or_else(|| ExtractError::structure(Field::Name, query))?
        .ancestor("tr")
        .ok_or_else(|| ExtractError::structure(Field::Name, format!("{query} < tr")))?;

    let text: String = row
        .find_all(&Query::tag("td"))
        .iter()
        .map(|td| td.text())
        .collect();

    let name = non_empty(Field::Name, &text, format!("{query} < tr td"))?;
    debug!(%name, "extracted name");
    Ok(name)
}

pub fn extract_price<N: DomNode>(table: &DetailTable<N>) -> Result<i64, ExtractError> {
    let cell = labelled_cell(table, Field::Price, PRICE_LABEL)?;
    let text = non_empty(Field::Price, &price_text(&cell), "price cell")?;

    let price = patterns::parse_price(&text)
        .map_err(|reason| ExtractError::value(Field::Price, text.as_str(), reason))?;
    debug!(price, "extracted price");
    Ok(price)
}

/// The price cell lists the amount and notes in separate paragraphs; the
/// amount is the one mentioning yen.
fn price_text<N: DomNode>(cell: &N) -> String {
    if let Some(p) = cell.find_first(&Query::tag("p").containing(YEN)) {
        return p.text();
    }
    match cell.find_first(&Query::tag("p")) {
        Some(p) => {
            warn!("price cell has no paragraph mentioning {YEN}, using the first one");
            p.text()
        }
        None => cell.text(),
    }
}

pub fn extract_floor_plan<N: DomNode>(table: &DetailTable<N>) -> Result<String, ExtractError> {
    let cell = labelled_cell(table, Field::FloorPlan, FLOOR_PLAN_LABEL)?;
    let floor_plan = non_empty(Field::FloorPlan, &cell.text(), "floor plan cell")?;
    debug!(%floor_plan, "extracted floor plan");
    Ok(floor_plan)
}

pub fn extract_land_area<N: DomNode>(table: &DetailTable<N>) -> Result<f64, ExtractError> {
    extract_area(table, Field::LandArea, LAND_AREA_LABEL)
}

pub fn extract_building_area<N: DomNode>(table: &DetailTable<N>) -> Result<f64, ExtractError> {
    extract_area(table, Field::BuildingArea, BUILDING_AREA_LABEL)
}

fn extract_area<N: DomNode>(
    table: &DetailTable<N>,
    field: Field,
    label: &str,
) -> Result<f64, ExtractError> {
    let cell = labelled_cell(table, field, label)?;
    let text = non_empty(field, &cell.text(), format!("{field} cell"))?;

    let area = patterns::parse_area(&text)
        .map_err(|reason| ExtractError::value(field, text.as_str(), reason))?;
    debug!(%field, area, "extracted area");
    Ok(area)
}

pub fn extract_construction_date<N: DomNode>(
    table: &DetailTable<N>,
) -> Result<DateTime<FixedOffset>, ExtractError> {
    let cell = labelled_cell(table, Field::ConstructionDate, CONSTRUCTION_DATE_LABEL)?;
    let text = non_empty(Field::ConstructionDate, &cell.text(), "construction date cell")?;

    let date = patterns::parse_construction_date(&text)
        .map_err(|reason| ExtractError::value(Field::ConstructionDate, text.as_str(), reason))?;
    debug!(%date, "extracted construction date");
    Ok(date)
}

/// First paragraph of the address cell; later ones hold map and area links.
pub fn extract_address<N: DomNode>(table: &DetailTable<N>) -> Result<String, ExtractError> {
    let cell = header_cell(table, Field::Address, ADDRESS_LABEL)?;
    let query = Query::tag("p");
    let paragraph = cell
        .find_all(&query)
        .into_iter()
        .find(|p| p.is_first_child())
        .ok_or_else(|| ExtractError::structure(Field::Address, "address cell p:first-child"))?;

    let address = non_empty(Field::Address, &paragraph.text(), "address cell p:first-child")?;
    debug!(%address, "extracted address");
    Ok(address)
}

/// One entry per `<div>` in the traffic cell, in page order.
pub fn extract_traffic<N: DomNode>(table: &DetailTable<N>) -> Result<Vec<String>, ExtractError> {
    let cell = header_cell(table, Field::Traffic, TRAFFIC_LABEL)?;
    let traffic: Vec<String> = cell
        .find_all(&Query::tag("div"))
        .iter()
        .map(|div| div.text().trim().to_string())
        .collect();

    if traffic.is_empty() {
        return Err(ExtractError::structure(Field::Traffic, "traffic cell div"));
    }
    debug!(lines = traffic.len(), "extracted traffic");
    Ok(traffic)
}

/// `<th><div class="fl">label</div>…</th><td>value</td>` -> the `<td>`.
fn labelled_cell<N: DomNode>(
    table: &DetailTable<N>,
    field: Field,
    label: &str,
) -> Result<N, ExtractError> {
    let query = Query::class(LABEL_CLASS).containing(label);
    table
        .find_first(&query)
        .ok_or_else(|| ExtractError::structure(field, query))?
        .ancestor("th")
        .and_then(|th| th.next_sibling())
        .ok_or_else(|| ExtractError::structure(field, format!("{query} < th + *")))
}

/// `<th>label</th><td>value</td>` -> the `<td>`.
fn header_cell<N: DomNode>(
    table: &DetailTable<N>,
    field: Field,
    label: &str,
) -> Result<N, ExtractError> {
    let query = Query::tag("th").containing(label);
    table
        .find_first(&query)
        .ok_or_else(|| ExtractError::structure(field, query))?
        .next_sibling()
        .ok_or_else(|| ExtractError::structure(field, format!("{query} + *")))
}

/// Blank cells count as a missing value, not a malformed one.
fn non_empty(field: Field, text: &str, searched: impl fmt::Display) -> Result<String, ExtractError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::structure(field, format!("{searched} (empty)")));
    }
    Ok(trimmed.to_string())
}
