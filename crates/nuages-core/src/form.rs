//! Creation form state.
//!
//! Owns the draft while the form is open and keeps the errors of the last
//! failed submit so they can be shown under the name input.

use nuages_common::catalog::{BaseImage, Service};
use nuages_common::constants::NAME_PLACEHOLDER;

use crate::container::Container;
use crate::validator::{self, CreateContainerData, FormField, ValidationError, ValidationErrors};

/// An open creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationForm {
    draft: CreateContainerData,
    errors: ValidationErrors,
}

impl CreationForm {
    /// Creates a form holding the default draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft.
    #[must_use]
    pub const fn draft(&self) -> &CreateContainerData {
        &self.draft
    }

    /// Errors from the last failed submit.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Error shown under the name input, if any.
    #[must_use]
    pub fn name_error(&self) -> Option<&ValidationError> {
        self.errors.for_field(FormField::Name)
    }

    /// Replaces the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    /// Appends one typed character to the name.
    pub fn push_name_char(&mut self, c: char) {
        self.draft.name.push(c);
    }

    /// Removes the last character of the name.
    pub fn pop_name_char(&mut self) {
        let _ = self.draft.name.pop();
    }

    /// Selects a base image.
    pub const fn set_image(&mut self, image: BaseImage) {
        self.draft.image = image;
    }

    /// Moves the image selection one step through the catalog.
    pub fn cycle_image(&mut self, forward: bool) {
        self.draft.image = if forward {
            self.draft.image.next()
        } else {
            self.draft.image.previous()
        };
    }

    /// Flips membership of a service. Returns `true` if it is now selected.
    pub fn toggle_service(&mut self, service: Service) -> bool {
        self.draft.toggle_service(service)
    }

    /// Domain the container would get, using a placeholder for an empty name.
    #[must_use]
    pub fn preview_domain(&self, suffix: &str) -> String {
        let name = if self.draft.name.is_empty() {
            NAME_PLACEHOLDER
        } else {
            &self.draft.name
        };
        Container::domain_for(name, suffix)
    }

    /// Validates the draft.
    ///
    /// On success the draft is handed out and the form resets to its
    /// default value.
    ///
    /// # Errors
    ///
    /// Returns the validation errors and keeps them, along with the draft,
    /// for display.
    pub fn submit(&mut self) -> Result<CreateContainerData, ValidationErrors> {
        match validator::validate(&self.draft) {
            Ok(()) => Ok(std::mem::take(self).draft),
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }
}
