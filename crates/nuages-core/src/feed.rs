//! Notification feed.
//!
//! An append-only sequence with individual removal. Entries never expire on
//! their own and the feed has no length cap.

use nuages_common::types::{NotificationId, NotificationKind};
use serde::{Deserialize, Serialize};

/// One user-facing event message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier.
    pub id: NotificationId,
    /// Message text.
    pub message: String,
    /// Severity.
    pub kind: NotificationKind,
    /// RFC 3339 creation timestamp.
    pub timestamp: String,
}

/// Ordered list of notifications awaiting dismissal.
#[derive(Debug)]
pub struct NotificationFeed {
    entries: Vec<Notification>,
    next_id: u64,
}

impl NotificationFeed {
    /// Creates an empty feed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a notification stamped with the current time.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> &Notification {
        let id = NotificationId::new(self.next_id.to_string());
        self.next_id += 1;
        let notification = Notification {
            id,
            message: message.into(),
            kind,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        tracing::debug!(id = %notification.id, %kind, message = %notification.message, "notification pushed");

        let idx = self.entries.len();
        self.entries.push(notification);
        &self.entries[idx]
    }

    /// Removes the matching notification. Absent ids are a no-op.
    pub fn dismiss(&mut self, id: &NotificationId) -> Option<Notification> {
        let idx = self.entries.iter().position(|n| &n.id == id)?;
        tracing::debug!(id = %id, "notification dismissed");
        Some(self.entries.remove(idx))
    }

    /// Iterates over the notifications in insertion order.
    ///
    /// Each call starts a fresh pass.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.entries.iter()
    }

    /// All notifications in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Notification] {
        &self.entries
    }

    /// Oldest notification still in the feed.
    #[must_use]
    pub fn oldest(&self) -> Option<&Notification> {
        self.entries.first()
    }

    /// Number of notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the feed is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a NotificationFeed {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
