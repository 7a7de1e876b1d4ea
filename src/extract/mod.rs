mod detail_table;
mod extract_error;
mod fields;
mod patterns;

pub use extract_error::ExtractError;
#[cfg(test)]
pub use extract_error::Field;

use crate::document::DomNode;
use crate::domain::PropertyRecord;
use detail_table::DetailTable;
use tracing::info;

/// Builds the record for one listing page.
///
/// `url` is only used for the listing id; everything else comes from `root`.
/// Stops at the first field that fails and returns that error unchanged.
pub fn extract_property<N: DomNode>(url: &str, root: &N) -> Result<PropertyRecord, ExtractError> {
    let id = fields::extract_id(url)?;
    let posting_date = fields::extract_posting_date(root)?;

    let table = DetailTable::locate(root)?;

    let record = PropertyRecord {
        id,
        posting_date,
        name: fields::extract_name(&table)?,
        price: fields::extract_price(&table)?,
        floor_plan: fields::extract_floor_plan(&table)?,
        land_area: fields::extract_land_area(&table)?,
        building_area: fields::extract_building_area(&table)?,
        construction_date: fields::extract_construction_date(&table)?,
        address: fields::extract_address(&table)?,
        traffic: fields::extract_traffic(&table)?,
    };

    info!(id = %record.id, "extracted property record");
    Ok(record)
}
