//! Service layer: write orchestration over the repository ports.

pub mod listing_service;

pub use listing_service::{ListingService, PropertySubmission, SubmissionReceipt};
