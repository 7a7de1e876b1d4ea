// src/domain/property.rs

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// One detached-house listing, fully extracted from its detail page.
///
/// Built once by `extract::extract_property` with every field present; there
/// is no partially filled record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRecord {
    /// Numeric listing id taken from the `/nc_<digits>/` URL segment.
    pub id: String,
    pub posting_date: DateTime<FixedOffset>,
    pub name: String,
    /// Yen, always a multiple of 10,000.
    pub price: i64,
    /// Room layout code such as `3LDK`.
    pub floor_plan: String,
    /// Square meters.
    pub land_area: f64,
    /// Square meters.
    pub building_area: f64,
    pub address: String,
    /// Transit access lines in page order.
    pub traffic: Vec<String>,
    /// First day of the completion month; may be a planned (future) month.
    pub construction_date: DateTime<FixedOffset>,
}

impl PropertyRecord {
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_to_flat_snake_case_json() {
        let jst = FixedOffset::east_opt(9 * 3600).unwrap();

        let record = PropertyRecord {
            id: "87706145".to_string(),
            posting_date: jst.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap(),
            name: "サンプルハウス".to_string(),
            price: 50_000_000,
            floor_plan: "3LDK".to_string(),
            land_area: 120.5,
            building_area: 98.0,
            address: "東京都新宿区西新宿1".to_string(),
            traffic: vec!["JR山手線「新宿」徒歩10分".to_string()],
            construction_date: jst.with_ymd_and_hms(2015, 3, 1, 0, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], "87706145");
        assert_eq!(json["posting_date"], "2024-05-10T00:00:00+09:00");
        assert_eq!(json["price"], 50_000_000);
        assert_eq!(json["floor_plan"], "3LDK");
        assert_eq!(json["land_area"], 120.5);
        assert_eq!(json["building_area"], 98.0);
        assert_eq!(json["traffic"][0], "JR山手線「新宿」徒歩10分");
        assert_eq!(json["construction_date"], "2015-03-01T00:00:00+09:00");
        assert_eq!(json.as_object().unwrap().len(), 10);
    }
}
