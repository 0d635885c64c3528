//! Write orchestrator for the two multi-step flows: property submission and
//! visit scheduling.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::instrument;

use crate::domain::errors::{StoreError, StoreResult};
use crate::domain::models::{NewClient, NewProperty, NewVisit, PropertyType};
use crate::domain::ports::{
    AgentRepository, ClientRepository, PropertyRepository, VisitRepository,
};

/// Submission form payload: the property being listed plus the contact
/// details of the submitting client.
#[derive(Debug, Clone)]
pub struct PropertySubmission {
    pub property_type: PropertyType,
    pub location: String,
    pub size_sqm: f64,
    pub price_usd: f64,
    pub image_url: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub property_id: i64,
    pub client_id: i64,
}

/// Orchestrates repository calls into the two write transactions.
///
/// Each write is a single atomic unit from the caller's perspective; there is
/// no multi-stage workflow and no retry. A failed write surfaces once.
pub struct ListingService {
    properties: Arc<dyn PropertyRepository>,
    agents: Arc<dyn AgentRepository>,
    clients: Arc<dyn ClientRepository>,
    visits: Arc<dyn VisitRepository>,
}

impl ListingService {
    pub fn new(
        properties: Arc<dyn PropertyRepository>,
        agents: Arc<dyn AgentRepository>,
        clients: Arc<dyn ClientRepository>,
        visits: Arc<dyn VisitRepository>,
    ) -> Self {
        Self {
            properties,
            agents,
            clients,
            visits,
        }
    }

    /// Submit a property for listing.
    ///
    /// Finds-or-creates the client by email, then inserts the property row.
    /// Concurrent submissions with the same email resolve to one client row
    /// (store-enforced uniqueness). A client row created before a failed
    /// property insert is harmless: find-or-create is idempotent, so no
    /// partial state is user-visible.
    #[instrument(skip(self, submission), fields(email = %submission.email), err)]
    pub async fn submit_property(
        &self,
        submission: PropertySubmission,
    ) -> StoreResult<SubmissionReceipt> {
        Self::validate(&submission)?;

        let client_id = self
            .clients
            .find_or_create(NewClient {
                first_name: submission.first_name,
                last_name: submission.last_name,
                email: submission.email,
                phone: submission.phone,
            })
            .await
            .map_err(as_write_error)?;

        let property_id = self
            .properties
            .insert(NewProperty {
                property_type: submission.property_type,
                location: submission.location,
                size_sqm: submission.size_sqm,
                price_usd: submission.price_usd,
                image_url: submission.image_url,
                agent_id: None,
            })
            .await
            .map_err(as_write_error)?;

        Ok(SubmissionReceipt {
            property_id,
            client_id,
        })
    }

    /// Schedule a visit, assigning one agent at random.
    ///
    /// Fails with `NoAgentsAvailable` before any row is written when the
    /// agent set is empty. Repeat bookings for the same property are allowed.
    #[instrument(skip(self), err)]
    pub async fn schedule_visit(
        &self,
        property_id: i64,
        client_id: i64,
        visit_date: NaiveDate,
    ) -> StoreResult<()> {
        let agent = self
            .agents
            .pick_random()
            .await
            .map_err(as_write_error)?
            .ok_or(StoreError::NoAgentsAvailable)?;

        self.visits
            .insert(NewVisit {
                property_id,
                client_id,
                agent_id: agent.id,
                visit_date,
            })
            .await
            .map_err(as_write_error)?;

        Ok(())
    }

    fn validate(submission: &PropertySubmission) -> StoreResult<()> {
        if submission.size_sqm <= 0.0 {
            return Err(StoreError::Validation(format!(
                "size_sqm must be positive, got {}",
                submission.size_sqm
            )));
        }
        if submission.price_usd <= 0.0 {
            return Err(StoreError::Validation(format!(
                "price_usd must be positive, got {}",
                submission.price_usd
            )));
        }
        if submission.email.trim().is_empty() {
            return Err(StoreError::Validation("email is required".to_string()));
        }
        if submission.first_name.trim().is_empty() || submission.last_name.trim().is_empty() {
            return Err(StoreError::Validation(
                "client name is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Collapse repository failures on the write path into a single `Write`
/// error; validation and agent-pool outcomes keep their identity.
fn as_write_error(err: StoreError) -> StoreError {
    match err {
        StoreError::Validation(_) | StoreError::NoAgentsAvailable => err,
        other => StoreError::Write(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> PropertySubmission {
        PropertySubmission {
            property_type: PropertyType::Apartment,
            location: "New York, NY".to_string(),
            size_sqm: 85.0,
            price_usd: 350_000.0,
            image_url: None,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "(555) 000-0001".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_submission() {
        assert!(ListingService::validate(&submission()).is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_size() {
        let bad = PropertySubmission {
            size_sqm: 0.0,
            ..submission()
        };
        assert!(matches!(
            ListingService::validate(&bad),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_positive_price() {
        let bad = PropertySubmission {
            price_usd: -1.0,
            ..submission()
        };
        assert!(matches!(
            ListingService::validate(&bad),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_blank_email() {
        let bad = PropertySubmission {
            email: "   ".to_string(),
            ..submission()
        };
        assert!(matches!(
            ListingService::validate(&bad),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn test_write_error_collapse_preserves_identity_cases() {
        assert!(matches!(
            as_write_error(StoreError::NoAgentsAvailable),
            StoreError::NoAgentsAvailable
        ));
        assert!(matches!(
            as_write_error(StoreError::Validation("x".to_string())),
            StoreError::Validation(_)
        ));
        assert!(matches!(
            as_write_error(StoreError::NotConfigured),
            StoreError::Write(_)
        ));
    }
}
