//! Host Allowlist Middleware
//!
//! Rejects requests whose `Host` does not match `security.allowed_hosts`.
//!
//! Pattern rules:
//! - `*` matches any host, including a missing one
//! - `.example.com` matches `example.com` and every subdomain of it
//! - anything else must match exactly
//!
//! Hosts are compared case-insensitively with the port and any trailing dot
//! removed.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header::HOST, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::shared::errors::ApiError;

/// Normalised host patterns checked for every request
#[derive(Debug, Clone)]
pub struct AllowedHosts {
    patterns: Arc<[String]>,
}

impl AllowedHosts {
    #[must_use]
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| p.as_ref().trim().to_ascii_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Whether any host (or no host at all) is accepted
    #[must_use]
    pub fn allows_any(&self) -> bool {
        self.patterns.iter().any(|p| p == "*")
    }

    /// Check a raw `Host` value (port allowed) against the patterns
    #[must_use]
    pub fn is_allowed(&self, raw_host: &str) -> bool {
        if self.allows_any() {
            return true;
        }

        let Some(domain) = domain_of(raw_host) else {
            return false;
        };

        self.patterns.iter().any(|pattern| matches_pattern(&domain, pattern))
    }
}

/// Strip the port and trailing dot, keeping IPv6 brackets
fn domain_of(raw_host: &str) -> Option<String> {
    let host = raw_host.trim().to_ascii_lowercase();

    let domain = if host.starts_with('[') {
        // [::1] or [::1]:8000
        let end = host.find(']')?;
        host[..=end].to_string()
    } else {
        match host.rsplit_once(':') {
            Some((domain, _port)) => domain.to_string(),
            None => host,
        }
    };

    let domain = domain.strip_suffix('.').map(ToString::to_string).unwrap_or(domain);

    if domain.is_empty() {
        None
    } else {
        Some(domain)
    }
}

fn matches_pattern(domain: &str, pattern: &str) -> bool {
    if let Some(parent) = pattern.strip_prefix('.') {
        domain == parent || domain.ends_with(pattern)
    } else {
        domain == pattern
    }
}

/// Middleware enforcing the host allowlist
pub async fn allowed_hosts_middleware(
    State(allowed): State<AllowedHosts>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if allowed.allows_any() {
        return next.run(request).await;
    }

    let host = request
        .headers()
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string)
        .or_else(|| request.uri().authority().map(|authority| authority.to_string()));

    match host {
        Some(host) if allowed.is_allowed(&host) => next.run(request).await,
        Some(host) => {
            tracing::warn!(host = %host, "Rejected request for disallowed host");
            ApiError::DisallowedHost(host).into_response()
        }
        None => {
            tracing::warn!("Rejected request without a host");
            ApiError::DisallowedHost(String::new()).into_response()
        }
    }
}
