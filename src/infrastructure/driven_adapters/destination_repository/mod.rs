//! Destination Repository Adapters
//!
//! PostgreSQL is the production store; the in-memory store backs tests and
//! throwaway local runs.

mod memory;
mod postgres;

pub use memory::InMemoryDestinationRepository;
pub use postgres::PostgresDestinationRepository;
