//! Top-level view selection.

use std::fmt;
use std::str::FromStr;

use nuages_common::error::NuagesError;
use serde::{Deserialize, Serialize};

/// A view that can be active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Overview statistics and recent activity.
    #[default]
    Dashboard,
    /// Container list with lifecycle actions.
    Containers,
    /// Account settings.
    Settings,
}

impl View {
    /// Every view, in navigation order.
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::Containers, Self::Settings];

    /// Navigation label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Containers => "My Nuages",
            Self::Settings => "Settings",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dashboard => write!(f, "dashboard"),
            Self::Containers => write!(f, "containers"),
            Self::Settings => write!(f, "settings"),
        }
    }
}

/// A navigation request. `Create` is not a view of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewSelection {
    /// Show the dashboard.
    Dashboard,
    /// Show the container list.
    Containers,
    /// Open the creation form over the container list.
    Create,
    /// Show account settings.
    Settings,
}

impl From<View> for ViewSelection {
    fn from(view: View) -> Self {
        match view {
            View::Dashboard => Self::Dashboard,
            View::Containers => Self::Containers,
            View::Settings => Self::Settings,
        }
    }
}

impl FromStr for ViewSelection {
    type Err = NuagesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(Self::Dashboard),
            "containers" => Ok(Self::Containers),
            "create" => Ok(Self::Create),
            "settings" => Ok(Self::Settings),
            other => Err(NuagesError::NotFound {
                kind: "view",
                id: other.to_string(),
            }),
        }
    }
}

/// What a selection did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The active view is now the given one.
    Switched(View),
    /// The container list is active and the creation form should open.
    OpenCreateForm,
}

/// Tracks the active view. Starts on the dashboard.
#[derive(Debug, Default)]
pub struct ViewCoordinator {
    active: View,
}

impl ViewCoordinator {
    /// Creates a coordinator showing the dashboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active view.
    #[must_use]
    pub const fn active(&self) -> View {
        self.active
    }

    /// Applies a navigation request.
    pub fn select(&mut self, selection: ViewSelection) -> Transition {
        let transition = match selection {
            ViewSelection::Dashboard => Transition::Switched(View::Dashboard),
            ViewSelection::Containers => Transition::Switched(View::Containers),
            ViewSelection::Settings => Transition::Switched(View::Settings),
            ViewSelection::Create => Transition::OpenCreateForm,
        };
        self.active = match transition {
            Transition::Switched(view) => view,
            Transition::OpenCreateForm => View::Containers,
        };
        tracing::debug!(?selection, active = %self.active, "view selected");
        transition
    }
}
