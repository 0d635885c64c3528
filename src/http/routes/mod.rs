//! Route handlers, organized by resource:
//! - properties: listing reads (with id lookup)
//! - visits: visit scheduling
//! - db_status: store connectivity probe
//! - health: service health

pub mod db_status;
pub mod health;
pub mod properties;
pub mod visits;

pub use db_status::*;
pub use health::*;
pub use properties::*;
pub use visits::*;
