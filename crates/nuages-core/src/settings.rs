//! Account profile and alert preferences shown on the settings view.

use serde::{Deserialize, Serialize};

/// Alert preference that can be switched on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preference {
    /// In-dashboard notifications.
    Notifications,
    /// Alerts sent by email.
    EmailAlerts,
    /// Security-related alerts.
    SecurityAlerts,
}

impl Preference {
    /// Every preference, in display order.
    pub const ALL: [Self; 3] = [Self::Notifications, Self::EmailAlerts, Self::SecurityAlerts];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Notifications => "Dashboard notifications",
            Self::EmailAlerts => "Email alerts",
            Self::SecurityAlerts => "Security alerts",
        }
    }
}

/// Profile and preferences of the signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSettings {
    /// Display name.
    pub full_name: String,
    /// Contact address.
    pub email: String,
    /// In-dashboard notifications enabled.
    pub notifications: bool,
    /// Email alerts enabled.
    pub email_alerts: bool,
    /// Security alerts enabled.
    pub security_alerts: bool,
    #[serde(skip)]
    dirty: bool,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            full_name: "Student User".to_string(),
            email: "student@univ-reunion.fr".to_string(),
            notifications: true,
            email_alerts: true,
            security_alerts: true,
            dirty: false,
        }
    }
}

impl AccountSettings {
    /// Whether a preference is on.
    #[must_use]
    pub const fn is_enabled(&self, preference: Preference) -> bool {
        match preference {
            Preference::Notifications => self.notifications,
            Preference::EmailAlerts => self.email_alerts,
            Preference::SecurityAlerts => self.security_alerts,
        }
    }

    /// Flips a preference and returns its new value.
    pub fn toggle(&mut self, preference: Preference) -> bool {
        self.dirty = true;
        let slot = match preference {
            Preference::Notifications => &mut self.notifications,
            Preference::EmailAlerts => &mut self.email_alerts,
            Preference::SecurityAlerts => &mut self.security_alerts,
        };
        *slot = !*slot;
        *slot
    }

    /// Replaces the display name.
    pub fn set_full_name(&mut self, name: impl Into<String>) {
        self.full_name = name.into();
        self.dirty = true;
    }

    /// Replaces the contact address.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.dirty = true;
    }

    /// Returns `true` if there are edits since the last save.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Records the current settings as saved. Nothing is persisted.
    pub fn save(&mut self) {
        tracing::info!(
            full_name = %self.full_name,
            email = %self.email,
            notifications = self.notifications,
            email_alerts = self.email_alerts,
            security_alerts = self.security_alerts,
            "settings saved"
        );
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let settings = AccountSettings::default();
        for p in Preference::ALL {
            assert!(settings.is_enabled(p));
        }
        assert_eq!(settings.full_name, "Student User");
        assert!(!settings.is_dirty());
    }

    #[test]
    fn toggle_flips_and_marks_dirty() {
        let mut settings = AccountSettings::default();
        assert!(!settings.toggle(Preference::EmailAlerts));
        assert!(!settings.email_alerts);
        assert!(settings.is_dirty());
        assert!(settings.toggle(Preference::EmailAlerts));
    }

    #[test]
    fn save_clears_dirty_flag() {
        let mut settings = AccountSettings::default();
        settings.set_email("someone@example.org");
        settings.save();
        assert!(!settings.is_dirty());
        assert_eq!(settings.email, "someone@example.org");
    }
}
