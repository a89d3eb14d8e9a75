//! Driving Adapters
//!
//! Entry points that drive the application: the HTTP REST API with its
//! handlers, DTOs, middleware and OpenAPI document.

pub mod api_rest;
