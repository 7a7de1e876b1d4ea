// patterns.rs
//
// One compiled pattern per value shape found on a listing page, each with the
// function that turns matching text into a typed value. Parse functions only
// report *why* text was rejected; callers attach the field and the text.

use chrono::{DateTime, FixedOffset, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Listing pages state dates in Japan Standard Time.
static JST: Lazy<FixedOffset> =
    Lazy::new(|| FixedOffset::east_opt(9 * 3600).expect("+09:00 is a valid offset"));

static LISTING_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/nc_([0-9]+)/").expect("valid listing id regex"));

static POSTING_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"情報提供日：(.*)$").expect("valid posting date regex"));

static PRICE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^(.*)万円$").expect("valid price regex"));

static AREA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.*)m2").expect("valid area regex"));

static YEAR_MONTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})年(\d{1,2})月$").expect("valid year-month regex"));

/// Ten-thousand yen, the unit listing prices are quoted in.
const MAN: i64 = 10_000;

/// `https://suumo.jp/ikkodate/tokyo/sc_shinjuku/nc_87706145/` -> `87706145`
pub fn parse_listing_id(url: &str) -> Option<String> {
    LISTING_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Parses the paragraph carrying `情報提供日：YYYY/M/D`.
pub fn parse_posting_line(text: &str) -> Result<DateTime<FixedOffset>, String> {
    let date = POSTING_LINE
        .captures(text.trim())
        .and_then(|caps| caps.get(1))
        .ok_or("missing 情報提供日： marker")?;

    parse_posting_date(date.as_str())
}

/// `2024/5/10` -> 2024-05-10T00:00:00+09:00
pub fn parse_posting_date(text: &str) -> Result<DateTime<FixedOffset>, String> {
    let date = NaiveDate::parse_from_str(text.trim(), "%Y/%m/%d")
        .map_err(|e| format!("not a YEAR/MONTH/DAY date: {e}"))?;
    jst_midnight(date)
}

/// `5000万円` -> 50_000_000
///
/// A `億` is only trimmed off the ends of the text; it is never converted, so
/// `1億2000万円` is rejected rather than read as 120 million. Existing output
/// depends on this, keep it.
pub fn parse_price(text: &str) -> Result<i64, String> {
    let trimmed = text.trim().trim_matches('億');

    let amount = PRICE
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .ok_or("missing 万円 suffix")?
        .as_str();

    if amount.starts_with(['+', '-']) {
        return Err(format!("{amount:?} is signed, prices are absolute"));
    }

    let man: i64 = amount
        .parse()
        .map_err(|e| format!("{amount:?} is not an integer: {e}"))?;

    man.checked_mul(MAN)
        .ok_or_else(|| format!("{man}万円 overflows yen"))
}

/// `123.45m2` or `123.45m2（登記）` -> 123.45
pub fn parse_area(text: &str) -> Result<f64, String> {
    let number = AREA
        .captures(text.trim())
        .and_then(|caps| caps.get(1))
        .ok_or("missing m2 unit")?
        .as_str()
        .trim();

    let area: f64 = number
        .parse()
        .map_err(|e| format!("{number:?} is not a number: {e}"))?;

    if !area.is_finite() {
        return Err(format!("{number:?} is not a finite number"));
    }
    Ok(area)
}

/// `2015年3月` or `2025年3月予定` -> first day of that month, JST.
pub fn parse_construction_date(text: &str) -> Result<DateTime<FixedOffset>, String> {
    let unplanned = text.trim().trim_matches(|c: char| c == '予' || c == '定');

    let caps = YEAR_MONTH
        .captures(unplanned)
        .ok_or("not a YEAR年MONTH月 date")?;

    let year: i32 = caps[1].parse().map_err(|e| format!("bad year: {e}"))?;
    let month: u32 = caps[2].parse().map_err(|e| format!("bad month: {e}"))?;

    let date = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| format!("{year}年{month}月 is not a calendar month"))?;
    jst_midnight(date)
}

fn jst_midnight(date: NaiveDate) -> Result<DateTime<FixedOffset>, String> {
    date.and_hms_opt(0, 0, 0)
        .and_then(|dt| dt.and_local_timezone(*JST).single())
        .ok_or_else(|| format!("{date} has no JST midnight"))
}
