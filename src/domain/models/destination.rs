//! Destination Domain Model
//!
//! Represents a travel destination listed by the service.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::shared::errors::DomainError;

/// Maximum number of characters allowed in a destination name
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum number of characters allowed in a destination country
pub const MAX_COUNTRY_LENGTH: usize = 255;

/// Newtype wrapper for Destination ID providing type safety
///
/// Ids are assigned by the persistence layer, never by the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DestinationId(i64);

impl DestinationId {
    /// Create a DestinationId from a raw database key
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the underlying integer key
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for DestinationId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for DestinationId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// Raw data submitted to create a Destination
#[derive(Debug, Clone, Default)]
pub struct CreateDestinationData {
    pub name: String,
    pub country: String,
    pub description: Option<String>,
}

/// Changes to apply to an existing Destination (absent fields stay untouched)
///
/// `description` is doubly optional: `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateDestinationData {
    pub name: Option<String>,
    pub country: Option<String>,
    pub description: Option<Option<String>>,
}

/// A validated Destination that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDestination {
    name: String,
    country: String,
    description: Option<String>,
}

impl NewDestination {
    /// Validate creation data against the entity invariants
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidField` if `name` or `country` is blank or
    /// longer than allowed.
    pub fn new(data: CreateDestinationData) -> Result<Self, DomainError> {
        Ok(Self {
            name: bounded_text("name", &data.name, MAX_NAME_LENGTH)?,
            country: bounded_text("country", &data.country, MAX_COUNTRY_LENGTH)?,
            description: data.description.as_deref().map(|d| d.trim().to_string()),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Destination domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    id: DestinationId,
    name: String,
    country: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl Destination {
    /// Restore a Destination from persisted data
    #[must_use]
    pub fn restore(
        id: DestinationId,
        name: String,
        country: String,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            country,
            description,
            created_at,
        }
    }

    /// Build the persisted form of a new destination
    #[must_use]
    pub fn from_new(id: DestinationId, new: NewDestination, created_at: DateTime<Utc>) -> Self {
        Self::restore(id, new.name, new.country, new.description, created_at)
    }

    /// Apply updates to the destination, returning a new instance
    ///
    /// `id` and `created_at` are carried over unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidField` if an updated `name` or `country`
    /// violates the entity invariants.
    pub fn with_updates(self, data: UpdateDestinationData) -> Result<Self, DomainError> {
        let name = match data.name {
            Some(name) => bounded_text("name", &name, MAX_NAME_LENGTH)?,
            None => self.name,
        };
        let country = match data.country {
            Some(country) => bounded_text("country", &country, MAX_COUNTRY_LENGTH)?,
            None => self.country,
        };
        let description = match data.description {
            Some(description) => description.as_deref().map(|d| d.trim().to_string()),
            None => self.description,
        };

        Ok(Self {
            id: self.id,
            name,
            country,
            description,
            created_at: self.created_at,
        })
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> DestinationId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.country)
    }
}

/// Trim a required text field and enforce its character bound
fn bounded_text(field: &'static str, value: &str, max: usize) -> Result<String, DomainError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(DomainError::InvalidField {
            field,
            message: "This field may not be blank.".to_string(),
        });
    }

    if trimmed.chars().count() > max {
        return Err(DomainError::InvalidField {
            field,
            message: format!("Ensure this field has no more than {max} characters."),
        });
    }

    Ok(trimmed.to_string())
}
