use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Property type enumeration
///
/// Closed set matching the values accepted by the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
    Land,
    Commercial,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Apartment => write!(f, "Apartment"),
            Self::House => write!(f, "House"),
            Self::Villa => write!(f, "Villa"),
            Self::Land => write!(f, "Land"),
            Self::Commercial => write!(f, "Commercial"),
        }
    }
}

impl FromStr for PropertyType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apartment" => Ok(Self::Apartment),
            "house" => Ok(Self::House),
            "villa" => Ok(Self::Villa),
            "land" => Ok(Self::Land),
            "commercial" => Ok(Self::Commercial),
            _ => Err(anyhow::anyhow!("Invalid property type: {s}")),
        }
    }
}

/// A listed property.
///
/// Rows are immutable once created: the submission flow inserts them and the
/// browsing surfaces only read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Store-generated identifier
    pub id: i64,

    pub property_type: PropertyType,

    /// Free-form location, e.g. "New York, NY"
    pub location: String,

    /// Interior or lot size in square meters; always positive
    pub size_sqm: f64,

    /// Asking price in US dollars; always positive
    pub price_usd: f64,

    pub image_url: Option<String>,

    /// Listing agent, when one has been assigned
    pub agent_id: Option<i64>,
}

/// Fields for inserting a new property row.
#[derive(Debug, Clone)]
pub struct NewProperty {
    pub property_type: PropertyType,
    pub location: String,
    pub size_sqm: f64,
    pub price_usd: f64,
    pub image_url: Option<String>,
    pub agent_id: Option<i64>,
}
