//! Destination Use Cases
//!
//! Business logic for managing travel destinations.

mod create_destination;
mod delete_destination;
mod get_destination_by_id;
mod list_destinations;
mod update_destination;

pub use create_destination::CreateDestinationUseCase;
pub use delete_destination::DeleteDestinationUseCase;
pub use get_destination_by_id::GetDestinationByIdUseCase;
pub use list_destinations::ListDestinationsUseCase;
pub use update_destination::UpdateDestinationUseCase;

use crate::domain::models::destination::DestinationId;
use crate::shared::errors::UseCaseError;

fn not_found(id: DestinationId) -> UseCaseError {
    UseCaseError::NotFound {
        resource: "Destination".to_string(),
        id: id.to_string(),
    }
}
