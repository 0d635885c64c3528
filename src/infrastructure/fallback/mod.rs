//! Fallback tier: the fixed seed datasets and the resilient repository
//! decorators that serve them when the live store fails.

pub mod resilient;
pub mod seed;

pub use resilient::{ResilientAgentRepository, ResilientPropertyRepository};
