//! Get Destination By ID Use Case
//!
//! Retrieves a single destination by its ID.

use std::sync::Arc;

use super::not_found;
use crate::domain::gateways::DestinationRepository;
use crate::domain::models::destination::{Destination, DestinationId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a destination by ID
pub struct GetDestinationByIdUseCase {
    destination_repository: Arc<dyn DestinationRepository>,
}

impl GetDestinationByIdUseCase {
    /// Create a new GetDestinationByIdUseCase
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
    pub async fn execute(&self, id: DestinationId) -> Result<Destination, UseCaseError> {
        tracing::debug!(destination_id = %id, "Getting destination by ID");

        let destination = self.destination_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(destination_id = %id, "Destination not found");
            not_found(id)
        })?;

        tracing::debug!(destination_id = %id, "Destination found");
        Ok(destination)
    }
}
