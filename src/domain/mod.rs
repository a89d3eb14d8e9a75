//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::destination_repository::DestinationRepository;
pub use models::destination::{
    CreateDestinationData, Destination, DestinationId, NewDestination, UpdateDestinationData,
};
