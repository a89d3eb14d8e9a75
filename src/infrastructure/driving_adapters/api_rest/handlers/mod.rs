//! HTTP Handlers

pub mod destinations;
pub mod root;
