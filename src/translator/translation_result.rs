use serde::Serialize;

use crate::clauses::FilterClause;

/// The SQL pieces produced for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    #[serde(rename = "where")]
    pub where_clause: FilterClause,
    pub having: FilterClause,
    /// `column DIRECTION` terms joined by `,`.
    pub order_by: String,
    pub group_by: String,
    pub select: String,
}
