//! Serializable form of the controller's action interface.
//!
//! Scripts are JSON arrays of actions, each tagged by an `"action"` field:
//!
//! ```json
//! [
//!   { "action": "create", "name": "demo", "image": "debian-12", "services": ["nginx"] },
//!   { "action": "start", "id": "3" },
//!   { "action": "change_view", "view": "containers" }
//! ]
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use nuages_common::catalog::{BaseImage, Service};
use nuages_common::error::{NuagesError, Result};
use nuages_common::types::{ContainerId, NotificationId};
use serde::{Deserialize, Serialize};

use crate::validator::{CreateContainerData, ValidationErrors};
use crate::view::ViewSelection;

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Create a container from a draft.
    Create {
        /// Requested name.
        name: String,
        /// Base image, Ubuntu if omitted.
        #[serde(default)]
        image: BaseImage,
        /// Selected services.
        #[serde(default)]
        services: BTreeSet<Service>,
    },
    /// Start a container.
    Start {
        /// Target container.
        id: ContainerId,
    },
    /// Stop a container.
    Stop {
        /// Target container.
        id: ContainerId,
    },
    /// Delete a container.
    Delete {
        /// Target container.
        id: ContainerId,
    },
    /// Dismiss a notification.
    Dismiss {
        /// Target notification.
        id: NotificationId,
    },
    /// Navigate to a view.
    ChangeView {
        /// Requested view.
        view: ViewSelection,
    },
    /// Open the creation form.
    OpenForm,
    /// Close the creation form, discarding its draft.
    CloseForm,
}

impl Action {
    /// Builds a create action from a draft.
    #[must_use]
    pub fn create(draft: CreateContainerData) -> Self {
        Self::Create {
            name: draft.name,
            image: draft.image,
            services: draft.services,
        }
    }
}

/// Result of dispatching one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action changed state.
    Applied,
    /// The action targeted something absent and was silently ignored.
    Skipped,
    /// The draft failed validation.
    Rejected(ValidationErrors),
}

impl ActionOutcome {
    /// Returns `true` if the action changed state.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Parses a JSON action script.
///
/// # Errors
///
/// Returns [`NuagesError::Serialization`] if the input is not a JSON array
/// of actions.
pub fn parse_script(json: &str) -> Result<Vec<Action>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a JSON action script from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_script(path: &Path) -> Result<Vec<Action>> {
    tracing::debug!(path = %path.display(), "loading action script");
    let content = std::fs::read_to_string(path).map_err(|e| NuagesError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_script(&content)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_every_action_kind() {
        let script = r#"[
            { "action": "create", "name": "demo", "image": "debian-12", "services": ["nginx", "redis"] },
            { "action": "start", "id": "3" },
            { "action": "stop", "id": "3" },
            { "action": "delete", "id": "3" },
            { "action": "dismiss", "id": "1" },
            { "action": "change_view", "view": "create" },
            { "action": "open_form" },
            { "action": "close_form" }
        ]"#;
        let actions = parse_script(script).unwrap();
        assert_eq!(actions.len(), 8);
        assert_eq!(
            actions[0],
            Action::Create {
                name: "demo".into(),
                image: BaseImage::Debian12,
                services: BTreeSet::from([Service::Nginx, Service::Redis]),
            }
        );
        assert_eq!(actions[1], Action::Start { id: ContainerId::new("3") });
        assert_eq!(
            actions[5],
            Action::ChangeView {
                view: ViewSelection::Create
            }
        );
        assert_eq!(actions[7], Action::CloseForm);
    }

    #[test]
    fn create_defaults_image_and_services() {
        let actions = parse_script(r#"[{ "action": "create", "name": "bare" }]"#).unwrap();
        assert_eq!(actions[0], Action::create(CreateContainerData::new("bare")));
    }

    #[test]
    fn unknown_image_is_rejected() {
        let err = parse_script(r#"[{ "action": "create", "name": "x", "image": "arch" }]"#)
            .unwrap_err();
        assert!(matches!(err, NuagesError::Serialization { .. }));
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(parse_script(r#"[{ "action": "reboot", "id": "1" }]"#).is_err());
    }

    #[test]
    fn load_script_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "action": "open_form" }}]"#).unwrap();
        assert_eq!(load_script(file.path()).unwrap(), vec![Action::OpenForm]);
    }
}
