//! TUI application state.
//!
//! Wraps the controller with the bits of state that only matter to the
//! terminal: list selection, form focus and cursors.

use nuages_common::catalog::Service;
use nuages_core::action::ActionOutcome;
use nuages_core::container::Container;
use nuages_core::controller::Controller;
use nuages_core::settings::Preference;
use nuages_core::view::ViewSelection;

/// Which input of the creation form receives keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormFocus {
    /// Name text input.
    #[default]
    Name,
    /// Base image picker.
    Image,
    /// Service checklist.
    Services,
}

impl FormFocus {
    /// Next input, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Image,
            Self::Image => Self::Services,
            Self::Services => Self::Name,
        }
    }

    /// Previous input, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Services,
            Self::Image => Self::Name,
            Self::Services => Self::Image,
        }
    }
}

/// Root application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the app should continue running.
    pub running: bool,
    /// Session state.
    pub controller: Controller,
    /// Index of the selected container in the list.
    pub selected_index: usize,
    /// Focused form input.
    pub form_focus: FormFocus,
    /// Highlighted row of the service checklist.
    pub service_cursor: usize,
    /// Highlighted row of the preference list.
    pub settings_cursor: usize,
}

impl App {
    /// Creates the application state around a controller.
    #[must_use]
    pub const fn new(controller: Controller) -> Self {
        Self {
            running: true,
            controller,
            selected_index: 0,
            form_focus: FormFocus::Name,
            service_cursor: 0,
            settings_cursor: 0,
        }
    }

    /// Signals the app to quit.
    pub const fn quit(&mut self) {
        self.running = false;
    }

    /// Navigates, resetting form focus when the creation form opens.
    pub fn change_view(&mut self, selection: ViewSelection) {
        let was_open = self.controller.is_create_form_open();
        self.controller.change_view(selection);
        if !was_open && self.controller.is_create_form_open() {
            self.reset_form_cursor();
        }
    }

    /// Container under the list cursor.
    #[must_use]
    pub fn selected_container(&self) -> Option<&Container> {
        self.controller.containers().get(self.selected_index)
    }

    /// Moves the list cursor down, stopping at the last container.
    pub fn select_next(&mut self) {
        let len = self.controller.containers().len();
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    /// Moves the list cursor up, stopping at the first container.
    pub const fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Starts the selected container if stopped, stops it if running.
    pub fn toggle_selected(&mut self) {
        let Some(container) = self.selected_container() else {
            return;
        };
        let id = container.id.clone();
        if container.is_running() {
            let _ = self.controller.stop_container(&id);
        } else {
            let _ = self.controller.start_container(&id);
        }
    }

    /// Deletes the selected container.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_container().map(|c| c.id.clone()) else {
            return;
        };
        let _ = self.controller.delete_container(&id);
        self.clamp_selection();
    }

    /// Dismisses the oldest notification still shown.
    pub fn dismiss_oldest(&mut self) {
        if let Some(id) = self.controller.feed().oldest().map(|n| n.id.clone()) {
            let _ = self.controller.dismiss_notification(&id);
        }
    }

    /// Submits the creation form. On success the new container is selected.
    pub fn submit_form(&mut self) -> ActionOutcome {
        let outcome = self.controller.submit_create_form();
        if outcome.is_applied() {
            self.selected_index = self.controller.containers().len().saturating_sub(1);
        }
        outcome
    }

    /// Flips the service under the checklist cursor.
    pub fn toggle_service_at_cursor(&mut self) {
        let Some(service) = Service::ALL.get(self.service_cursor).copied() else {
            return;
        };
        if let Some(form) = self.controller.create_form_mut() {
            let _ = form.toggle_service(service);
        }
    }

    /// Moves the service cursor by one row, clamped to the catalog.
    pub const fn move_service_cursor(&mut self, down: bool) {
        if down {
            if self.service_cursor + 1 < Service::ALL.len() {
                self.service_cursor += 1;
            }
        } else {
            self.service_cursor = self.service_cursor.saturating_sub(1);
        }
    }

    /// Moves the preference cursor by one row, clamped to the list.
    pub const fn move_settings_cursor(&mut self, down: bool) {
        if down {
            if self.settings_cursor + 1 < Preference::ALL.len() {
                self.settings_cursor += 1;
            }
        } else {
            self.settings_cursor = self.settings_cursor.saturating_sub(1);
        }
    }

    /// Flips the preference under the cursor.
    pub fn toggle_preference_at_cursor(&mut self) {
        if let Some(preference) = Preference::ALL.get(self.settings_cursor).copied() {
            let _ = self.controller.settings_mut().toggle(preference);
        }
    }

    const fn reset_form_cursor(&mut self) {
        self.form_focus = FormFocus::Name;
        self.service_cursor = 0;
    }

    fn clamp_selection(&mut self) {
        let len = self.controller.containers().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }
}
