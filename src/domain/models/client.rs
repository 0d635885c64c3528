use serde::{Deserialize, Serialize};

/// A prospective buyer or seller.
///
/// Clients are identified by email: the submission flow finds-or-creates a
/// row per unique email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Store-generated identifier
    pub id: i64,

    pub first_name: String,
    pub last_name: String,

    /// Natural key; unique at the store
    pub email: String,

    pub phone: String,
}

/// Fields for inserting a new client row.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}
