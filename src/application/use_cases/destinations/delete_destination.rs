//! Delete Destination Use Case
//!
//! Permanently removes a destination.

use std::sync::Arc;

use super::not_found;
use crate::domain::gateways::DestinationRepository;
use crate::domain::models::destination::DestinationId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a destination
pub struct DeleteDestinationUseCase {
    destination_repository: Arc<dyn DestinationRepository>,
}

impl DeleteDestinationUseCase {
    /// Create a new DeleteDestinationUseCase
    #[must_use]
    pub fn new(destination_repository: Arc<dyn DestinationRepository>) -> Self {
        Self { destination_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the destination doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: DestinationId) -> Result<(), UseCaseError> {
        tracing::info!(destination_id = %id, "Deleting destination");

        let deleted = self.destination_repository.delete(id).await?;

        if !deleted {
            tracing::warn!(destination_id = %id, "Destination not found for deletion");
            return Err(not_found(id));
        }

        tracing::info!(destination_id = %id, "Destination deleted successfully");
        Ok(())
    }
}
