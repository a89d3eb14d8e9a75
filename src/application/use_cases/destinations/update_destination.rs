//! Update Destination Use Case (PUT and PATCH)
//!
//! Applies field changes to an existing destination. Full and partial updates
//! differ only in which fields the request must carry, so both share this use case.

use std::sync::Arc;

use super::not_found;
use crate::domain::gateways::DestinationRepository;
use crate::domain::models::destination::{Destination, DestinationId, UpdateDestinationData};
use crate::shared::errors::UseCaseError;

/// Use case for updating a destination
pub struct UpdateDestinationUseCase {
    destination_repository: Arc<dyn DestinationRepository>,
}

impl UpdateDestinationUseCase {
    /// Create a new UpdateDestinationUseCase
    #[must_use]
    pub fn new(destination_repository: Arc<dyn DestinationRepository>) -> Self {
        Self { destination_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the destination doesn't exist.
    /// Returns `UseCaseError::Domain` if the changes violate the entity invariants.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        id: DestinationId,
        data: UpdateDestinationData,
    ) -> Result<Destination, UseCaseError> {
        tracing::info!(destination_id = %id, "Updating destination");

        let existing = self.destination_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(destination_id = %id, "Destination not found for update");
            not_found(id)
        })?;

        let updated = existing.with_updates(data)?;

        // The row can vanish between the read and the write.
        let result = self
            .destination_repository
            .update(&updated)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(
            destination_id = %id,
            destination = %result,
            "Destination updated successfully"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::destination_repository::MockDestinationRepository;
    use crate::shared::errors::DomainError;
    use chrono::{Duration, Utc};

    fn stored() -> Destination {
        Destination::restore(
            DestinationId::new(5),
            "Cusco".to_string(),
            "Peru".to_string(),
            Some("Gateway to Machu Picchu".to_string()),
            Utc::now() - Duration::days(3),
        )
    }

    #[tokio::test]
    async fn should_update_only_supplied_fields() {
        let original = stored();
        let found = original.clone();

        let mut repo = MockDestinationRepository::new();
        repo.expect_find_by_id().returning(move |_| Ok(Some(found.clone())));
        repo.expect_update()
            .times(1)
            .returning(|destination| Ok(Some(destination.clone())));

        let use_case = UpdateDestinationUseCase::new(Arc::new(repo));
        let updated = use_case
            .execute(
                original.id(),
                UpdateDestinationData {
                    country: Some("Perú".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id(), original.id());
        assert_eq!(updated.created_at(), original.created_at());
        assert_eq!(updated.name(), "Cusco");
        assert_eq!(updated.country(), "Perú");
        assert_eq!(updated.description(), original.description());
    }

    #[tokio::test]
    async fn should_return_not_found_when_destination_does_not_exist() {
        let mut repo = MockDestinationRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let use_case = UpdateDestinationUseCase::new(Arc::new(repo));
        let result = use_case
            .execute(DestinationId::new(404), UpdateDestinationData::default())
            .await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn should_return_not_found_when_row_disappears_before_write() {
        let found = stored();

        let mut repo = MockDestinationRepository::new();
        repo.expect_find_by_id().returning(move |_| Ok(Some(found.clone())));
        repo.expect_update().returning(|_| Ok(None));

        let use_case = UpdateDestinationUseCase::new(Arc::new(repo));
        let result = use_case
            .execute(DestinationId::new(5), UpdateDestinationData::default())
            .await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn should_reject_invalid_changes_without_writing() {
        let found = stored();

        let mut repo = MockDestinationRepository::new();
        repo.expect_find_by_id().returning(move |_| Ok(Some(found.clone())));
        repo.expect_update().never();

        let use_case = UpdateDestinationUseCase::new(Arc::new(repo));
        let result = use_case
            .execute(
                DestinationId::new(5),
                UpdateDestinationData {
                    name: Some("x".repeat(256)),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(
            result.unwrap_err(),
            UseCaseError::Domain(DomainError::InvalidField { field: "name", .. })
        ));
    }
}
