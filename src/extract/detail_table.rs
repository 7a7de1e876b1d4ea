use super::extract_error::{ExtractError, Field};
use crate::document::{DomNode, Query};
use tracing::debug;

const MAIN_CONTENTS_ID: &str = "mainContents";
const SECTION_TITLE_CLASS: &str = "secTitleInnerR";
const DETAIL_SECTION_MARKER: &str = "物件詳細情報";

/// The tables under the "物件詳細情報" heading. Every label-keyed field is
/// looked up here, never in the rest of the page.
#[derive(Debug, Clone)]
pub struct DetailTable<N> {
    tables: Vec<N>,
}

impl<N: DomNode> DetailTable<N> {
    /// Finds the section title, climbs to the section that holds it and its
    /// tables, and keeps every table in that section.
    pub fn locate(root: &N) -> Result<Self, ExtractError> {
        let main_query = Query::id(MAIN_CONTENTS_ID);
        let title_query = Query::class(SECTION_TITLE_CLASS).containing(DETAIL_SECTION_MARKER);
        let context = format!("{main_query} {title_query} < < table");

        let title = root
            .find_first(&main_query)
            .and_then(|main| main.find_first(&title_query))
            .ok_or_else(|| ExtractError::structure(Field::DetailsTable, &context))?;

        let section = title
            .parent()
            .and_then(|p| p.parent())
            .ok_or_else(|| ExtractError::structure(Field::DetailsTable, &context))?;

        let tables = section.find_all(&Query::tag("table"));
        if tables.is_empty() {
            return Err(ExtractError::structure(Field::DetailsTable, &context));
        }

        debug!(tables = tables.len(), "located details table");
        Ok(Self { tables })
    }

    /// First match across the detail tables, in document order.
    pub fn find_first(&self, query: &Query<'_>) -> Option<N> {
        self.tables.iter().find_map(|t| t.find_first(query))
    }
}
