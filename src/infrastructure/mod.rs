//! Infrastructure Layer
//!
//! Everything that touches the outside world: the REST API (driving side)
//! and persistence plus configuration (driven side).

pub mod driven_adapters;
pub mod driving_adapters;
