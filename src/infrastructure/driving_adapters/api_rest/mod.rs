//! REST API Module
//!
//! Contains HTTP handlers, DTOs, request parsing, middleware, the router and
//! the OpenAPI document for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod request;
pub mod router;

use std::sync::Arc;

use crate::application::use_cases::destinations::{
    CreateDestinationUseCase, DeleteDestinationUseCase, GetDestinationByIdUseCase,
    ListDestinationsUseCase, UpdateDestinationUseCase,
};
use crate::domain::gateways::DestinationRepository;
use crate::infrastructure::driven_adapters::config::AppConfig;

pub use router::router;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub list_destinations_use_case: Arc<ListDestinationsUseCase>,
    pub get_destination_by_id_use_case: Arc<GetDestinationByIdUseCase>,
    pub create_destination_use_case: Arc<CreateDestinationUseCase>,
    pub update_destination_use_case: Arc<UpdateDestinationUseCase>,
    pub delete_destination_use_case: Arc<DeleteDestinationUseCase>,
}

impl AppState {
    /// Wire every use case to the given repository
    #[must_use]
    pub fn new(
        config: Arc<AppConfig>,
        destination_repository: Arc<dyn DestinationRepository>,
    ) -> Self {
        Self {
            config,
            list_destinations_use_case: Arc::new(ListDestinationsUseCase::new(
                destination_repository.clone(),
            )),
            get_destination_by_id_use_case: Arc::new(GetDestinationByIdUseCase::new(
                destination_repository.clone(),
            )),
            create_destination_use_case: Arc::new(CreateDestinationUseCase::new(
                destination_repository.clone(),
            )),
            update_destination_use_case: Arc::new(UpdateDestinationUseCase::new(
                destination_repository.clone(),
            )),
            delete_destination_use_case: Arc::new(DeleteDestinationUseCase::new(
                destination_repository,
            )),
        }
    }
}
