//! API Middleware
//!
//! Host validation and request tracing middleware for the REST API.

pub mod allowed_hosts;
pub mod request_id;

pub use allowed_hosts::{allowed_hosts_middleware, AllowedHosts};
pub use request_id::{request_id_middleware, RequestId};
