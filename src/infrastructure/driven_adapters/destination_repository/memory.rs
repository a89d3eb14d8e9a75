//! In-memory Destination Repository
//!
//! Will be destroyed on process shutdown.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::gateways::DestinationRepository;
use crate::domain::models::destination::{Destination, DestinationId, NewDestination};
use crate::shared::errors::RepositoryError;

#[derive(Debug, Default)]
struct Store {
    /// Last id handed out; ids are never reused, even after deletes
    last_id: i64,

    /// Keyed by id so iteration follows insertion order
    destinations: BTreeMap<DestinationId, Destination>,
}

/// An in-memory DestinationRepository
#[derive(Clone, Debug, Default)]
pub struct InMemoryDestinationRepository {
    store: Arc<Mutex<Store>>,
}

impl InMemoryDestinationRepository {
    /// Create a new empty in-memory repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DestinationRepository for InMemoryDestinationRepository {
    async fn find_all(&self) -> Result<Vec<Destination>, RepositoryError> {
        Ok(self.store.lock().await.destinations.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DestinationId) -> Result<Option<Destination>, RepositoryError> {
        Ok(self.store.lock().await.destinations.get(&id).cloned())
    }

    async fn create(&self, destination: &NewDestination) -> Result<Destination, RepositoryError> {
        let mut store = self.store.lock().await;

        store.last_id += 1;
        let id = DestinationId::new(store.last_id);
        let created = Destination::from_new(id, destination.clone(), Utc::now());

        store.destinations.insert(id, created.clone());

        Ok(created)
    }

    async fn update(
        &self,
        destination: &Destination,
    ) -> Result<Option<Destination>, RepositoryError> {
        let mut store = self.store.lock().await;

        Ok(store.destinations.get_mut(&destination.id()).map(|stored| {
            // created_at is owned by the store, never by the caller
            *stored = Destination::restore(
                stored.id(),
                destination.name().to_string(),
                destination.country().to_string(),
                destination.description().map(ToString::to_string),
                stored.created_at(),
            );
            stored.clone()
        }))
    }

    async fn delete(&self, id: DestinationId) -> Result<bool, RepositoryError> {
        Ok(self.store.lock().await.destinations.remove(&id).is_some())
    }
}
