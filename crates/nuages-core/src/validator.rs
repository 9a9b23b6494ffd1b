//! Creation draft and its validation rules.
//!
//! The image and services of a draft come from closed enums, so only the
//! free-text name needs runtime checks.

use std::collections::BTreeSet;
use std::fmt;

use nuages_common::catalog::{BaseImage, Service};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input collected by the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateContainerData {
    /// Requested container name.
    pub name: String,
    /// Base image.
    pub image: BaseImage,
    /// Selected services. Membership only; order is irrelevant.
    pub services: BTreeSet<Service>,
}

impl CreateContainerData {
    /// Creates a draft with the given name and default image.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the base image.
    #[must_use]
    pub const fn with_image(mut self, image: BaseImage) -> Self {
        self.image = image;
        self
    }

    /// Adds a service.
    #[must_use]
    pub fn with_service(mut self, service: Service) -> Self {
        let _ = self.services.insert(service);
        self
    }

    /// Flips membership of a service. Returns `true` if it is now selected.
    pub fn toggle_service(&mut self, service: Service) -> bool {
        if self.services.remove(&service) {
            false
        } else {
            self.services.insert(service)
        }
    }
}

/// Form field an error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// The container name input.
    Name,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
        }
    }
}

/// A single field-scoped validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The field is empty once whitespace is trimmed.
    #[error("Container name is required")]
    RequiredField {
        /// Offending field.
        field: FormField,
    },
    /// The field contains characters outside its allowed set.
    #[error("Name can only contain lowercase letters, numbers, and hyphens")]
    Format {
        /// Offending field.
        field: FormField,
    },
}

impl ValidationError {
    /// Field the error belongs to.
    #[must_use]
    pub const fn field(&self) -> FormField {
        match self {
            Self::RequiredField { field } | Self::Format { field } => *field,
        }
    }
}

/// Every failure found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Returns `true` if no errors were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the recorded errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// First error recorded for a field, if any.
    #[must_use]
    pub fn for_field(&self, field: FormField) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field() == field)
    }

    fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {error}", error.field())?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Outcome of validating a draft.
pub type ValidationResult = Result<(), ValidationErrors>;

/// Validates a draft before it is admitted into the registry.
///
/// # Checks performed
///
/// 1. The name is non-empty after trimming whitespace.
/// 2. The name only contains `a-z`, `0-9` and `-`.
///
/// Only the first failing check per field is reported.
///
/// # Errors
///
/// Returns the list of field errors if any check fails.
pub fn validate(draft: &CreateContainerData) -> ValidationResult {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().is_empty() {
        errors.push(ValidationError::RequiredField {
            field: FormField::Name,
        });
    } else if !is_valid_name(&draft.name) {
        errors.push(ValidationError::Format {
            field: FormField::Name,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(name = %draft.name, %errors, "draft rejected");
        Err(errors)
    }
}

/// Returns `true` if `name` matches `^[a-z0-9-]+$`.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
