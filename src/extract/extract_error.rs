use std::fmt;
use thiserror::Error;

/// The part of a listing an extraction step was working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    DetailsTable,
    Id,
    PostingDate,
    Name,
    Price,
    FloorPlan,
    LandArea,
    BuildingArea,
    ConstructionDate,
    Address,
    Traffic,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::DetailsTable => "details table",
            Field::Id => "id",
            Field::PostingDate => "posting_date",
            Field::Name => "name",
            Field::Price => "price",
            Field::FloorPlan => "floor_plan",
            Field::LandArea => "land_area",
            Field::BuildingArea => "building_area",
            Field::ConstructionDate => "construction_date",
            Field::Address => "address",
            Field::Traffic => "traffic",
        };
        f.write_str(name)
    }
}

/// Why a listing page could not be turned into a record.
///
/// `StructureNotFound` means the page no longer looks the way the extractor
/// expects (schema drift, or the listing simply lacks the field).
/// `ValueParse` means the value was found but its text has an unexpected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("{field} not found (query: {query})")]
    StructureNotFound { field: Field, query: String },

    #[error("{field}: cannot parse {text:?}: {reason}")]
    ValueParse {
        field: Field,
        text: String,
        reason: String,
    },

    #[error("ID not found in URL {url}")]
    UrlFormat { url: String },
}

impl ExtractError {
    pub fn structure(field: Field, query: impl fmt::Display) -> Self {
        ExtractError::StructureNotFound {
            field,
            query: query.to_string(),
        }
    }

    pub fn value(field: Field, text: impl Into<String>, reason: impl Into<String>) -> Self {
        ExtractError::ValueParse {
            field,
            text: text.into(),
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> Field {
        match self {
            ExtractError::StructureNotFound { field, .. } => *field,
            ExtractError::ValueParse { field, .. } => *field,
            ExtractError::UrlFormat { .. } => Field::Id,
        }
    }
}
