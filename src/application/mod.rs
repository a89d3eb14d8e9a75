//! Application Layer
//!
//! Contains use cases that orchestrate domain logic.

pub mod use_cases;
