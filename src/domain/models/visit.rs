use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled property visit.
///
/// Append-only: visits are never updated or deleted, and a client may book
/// multiple visits to the same property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    /// Store-generated identifier
    pub id: i64,

    pub property_id: i64,
    pub client_id: i64,

    /// Assigned agent; always references an existing agent row
    pub agent_id: i64,

    pub visit_date: NaiveDate,
}

/// Fields for inserting a new visit row.
#[derive(Debug, Clone)]
pub struct NewVisit {
    pub property_id: i64,
    pub client_id: i64,
    pub agent_id: i64,
    pub visit_date: NaiveDate,
}
