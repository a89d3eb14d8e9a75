//! Destination DTOs
//!
//! Data transfer objects for destination API endpoints. Request DTOs carry the
//! field rules of the public API; `id` and `created_at` are read-only and any
//! value supplied for them in a request body is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::models::destination::{
    CreateDestinationData, Destination, UpdateDestinationData, MAX_COUNTRY_LENGTH, MAX_NAME_LENGTH,
};

/// Request fields that must be JSON strings (or `null`) when present
pub const TEXT_FIELDS: &[&str] = &["name", "country", "description"];

const NULL_MESSAGE: &str = "This field may not be null.";
const BLANK_MESSAGE: &str = "This field may not be blank.";

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`)
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Validates a bounded, non-blank text field (measured after trimming)
fn check_char_field(value: &str, max: usize) -> Result<(), ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(BLANK_MESSAGE.into());
        return Err(error);
    }

    if trimmed.chars().count() > max {
        let mut error = ValidationError::new("max_length");
        error.message =
            Some(format!("Ensure this field has no more than {max} characters.").into());
        return Err(error);
    }

    Ok(())
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    check_char_field(name, MAX_NAME_LENGTH)
}

fn validate_country(country: &str) -> Result<(), ValidationError> {
    check_char_field(country, MAX_COUNTRY_LENGTH)
}

/// DTO for creating a new destination
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateDestinationDto {
    #[validate(required(message = "This field is required."))]
    #[validate(custom(function = "validate_name"))]
    #[schema(value_type = String, max_length = 255, example = "Paris")]
    pub name: Option<String>,

    #[validate(required(message = "This field is required."))]
    #[validate(custom(function = "validate_country"))]
    #[schema(value_type = String, max_length = 255, example = "France")]
    pub country: Option<String>,

    #[schema(nullable, example = "City of light")]
    pub description: Option<String>,
}

impl From<CreateDestinationDto> for CreateDestinationData {
    fn from(dto: CreateDestinationDto) -> Self {
        // Presence is checked by validate(); the domain rejects blanks anyway.
        Self {
            name: dto.name.unwrap_or_default(),
            country: dto.country.unwrap_or_default(),
            description: dto.description,
        }
    }
}

/// DTO for full destination update (PUT)
///
/// `name` and `country` are required. An absent `description` is left
/// unchanged while an explicit `null` clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateDestinationDto {
    #[validate(required(message = "This field is required."))]
    #[validate(custom(function = "validate_name"))]
    #[schema(value_type = String, max_length = 255, example = "Paris")]
    pub name: Option<String>,

    #[validate(required(message = "This field is required."))]
    #[validate(custom(function = "validate_country"))]
    #[schema(value_type = String, max_length = 255, example = "France")]
    pub country: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>, nullable, example = "City of light")]
    pub description: Option<Option<String>>,
}

impl From<UpdateDestinationDto> for UpdateDestinationData {
    fn from(dto: UpdateDestinationDto) -> Self {
        Self {
            name: dto.name,
            country: dto.country,
            description: dto.description,
        }
    }
}

/// DTO for partial destination update (PATCH)
///
/// All fields are optional. Only provided fields are validated and updated.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PatchDestinationDto {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>, max_length = 255, example = "Paris")]
    pub name: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>, max_length = 255, example = "France")]
    pub country: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>, nullable, example = "City of light")]
    pub description: Option<Option<String>>,
}

/// Checks a PATCH field that, when present, must be a non-null bounded string
fn check_patch_field(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&Option<String>>,
    max: usize,
) {
    let result = match value {
        None => Ok(()),
        Some(None) => {
            let mut error = ValidationError::new("null");
            error.message = Some(NULL_MESSAGE.into());
            Err(error)
        }
        Some(Some(text)) => check_char_field(text, max),
    };

    if let Err(error) = result {
        errors.add(field, error);
    }
}

impl Validate for PatchDestinationDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_patch_field(&mut errors, "name", self.name.as_ref(), MAX_NAME_LENGTH);
        check_patch_field(&mut errors, "country", self.country.as_ref(), MAX_COUNTRY_LENGTH);

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<PatchDestinationDto> for UpdateDestinationData {
    fn from(dto: PatchDestinationDto) -> Self {
        Self {
            name: dto.name.flatten(),
            country: dto.country.flatten(),
            description: dto.description,
        }
    }
}

/// Destination response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DestinationResponseDto {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Paris")]
    pub name: String,
    #[schema(example = "France")]
    pub country: String,
    #[schema(nullable)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Destination> for DestinationResponseDto {
    fn from(destination: Destination) -> Self {
        Self::from(&destination)
    }
}

impl From<&Destination> for DestinationResponseDto {
    fn from(destination: &Destination) -> Self {
        Self {
            id: destination.id().value(),
            name: destination.name().to_string(),
            country: destination.country().to_string(),
            description: destination.description().map(ToString::to_string),
            created_at: destination.created_at(),
        }
    }
}
