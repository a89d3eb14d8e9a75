//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod destination;

pub use destination::{
    CreateDestinationData, Destination, DestinationId, NewDestination, UpdateDestinationData,
};
