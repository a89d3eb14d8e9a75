//! Destination Repository Gateway
//!
//! Abstract trait defining the contract for destination persistence operations.

use async_trait::async_trait;

use crate::domain::models::destination::{Destination, DestinationId, NewDestination};
use crate::shared::errors::RepositoryError;

/// Repository trait for Destination persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    /// Find all destinations, ordered by id ascending
    async fn find_all(&self) -> Result<Vec<Destination>, RepositoryError>;

    /// Find a destination by its ID
    async fn find_by_id(&self, id: DestinationId) -> Result<Option<Destination>, RepositoryError>;

    /// Persist a new destination, assigning its id and creation timestamp
    async fn create(&self, destination: &NewDestination) -> Result<Destination, RepositoryError>;

    /// Update the mutable fields of an existing destination
    ///
    /// Returns `None` if the destination no longer exists.
    async fn update(
        &self,
        destination: &Destination,
    ) -> Result<Option<Destination>, RepositoryError>;

    /// Hard delete a destination, returning whether a row was removed
    async fn delete(&self, id: DestinationId) -> Result<bool, RepositoryError>;
}
