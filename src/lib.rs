//! Travel Listings API
//!
//! A Rust-based microservice exposing CRUD access to travel destinations,
//! following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
