//! List Destinations Use Case
//!
//! Retrieves every destination in insertion order.

use std::sync::Arc;

use crate::domain::gateways::DestinationRepository;
use crate::domain::models::destination::Destination;
use crate::shared::errors::UseCaseError;

/// Use case for listing all destinations
pub struct ListDestinationsUseCase {
    destination_repository: Arc<dyn DestinationRepository>,
}

impl ListDestinationsUseCase {
    /// Create a new ListDestinationsUseCase
    #[must_use]
    pub fn new(destination_repository: Arc<dyn DestinationRepository>) -> Self {
        Self { destination_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Destination>, UseCaseError> {
        tracing::debug!("Listing destinations");

        let destinations = self.destination_repository.find_all().await?;

        tracing::debug!(count = destinations.len(), "Destinations listed");
        Ok(destinations)
    }
}
