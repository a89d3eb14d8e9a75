//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod destination;

pub use destination::{
    CreateDestinationDto, DestinationResponseDto, PatchDestinationDto, UpdateDestinationDto,
};
