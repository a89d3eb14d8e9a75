//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration

pub mod config;
pub mod database;
pub mod destination_repository;

pub use config::AppConfig;
pub use destination_repository::{InMemoryDestinationRepository, PostgresDestinationRepository};
