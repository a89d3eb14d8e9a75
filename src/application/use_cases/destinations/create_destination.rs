//! Create Destination Use Case
//!
//! Validates and persists a new destination.

use std::sync::Arc;

use crate::domain::gateways::DestinationRepository;
use crate::domain::models::destination::{CreateDestinationData, Destination, NewDestination};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new destination
pub struct CreateDestinationUseCase {
    destination_repository: Arc<dyn DestinationRepository>,
}

impl CreateDestinationUseCase {
    /// Create a new CreateDestinationUseCase
    #[must_use]
    pub fn new(destination_repository: Arc<dyn DestinationRepository>) -> Self {
        Self { destination_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the data violates the entity invariants;
    /// nothing is persisted in that case.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateDestinationData) -> Result<Destination, UseCaseError> {
        tracing::info!(name = %data.name, country = %data.country, "Creating new destination");

        let destination = NewDestination::new(data)?;
        let created = self.destination_repository.create(&destination).await?;

        tracing::info!(
            destination_id = %created.id(),
            destination = %created,
            "Destination created successfully"
        );

        Ok(created)
    }
}
