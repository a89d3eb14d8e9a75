//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod destinations;

pub use destinations::{
    CreateDestinationUseCase, DeleteDestinationUseCase, GetDestinationByIdUseCase,
    ListDestinationsUseCase, UpdateDestinationUseCase,
};
