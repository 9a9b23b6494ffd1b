//! Notification bar shown above the active view.

use nuages_common::types::NotificationKind;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::app::App;

/// Most notifications shown at once. Older ones stay in the feed but are
/// hidden until newer ones are dismissed or fall out of the window.
const MAX_VISIBLE: usize = 4;

/// Rows the bar needs, 0 when the feed is empty.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn height(app: &App) -> u16 {
    let len = app.controller.notifications().len();
    if len == 0 {
        0
    } else {
        len.min(MAX_VISIBLE) as u16 + 2
    }
}

const fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Warning => Color::Yellow,
        NotificationKind::Error => Color::Red,
        NotificationKind::Info => Color::Blue,
    }
}

const fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✔",
        NotificationKind::Warning => "!",
        NotificationKind::Error => "✘",
        NotificationKind::Info => "i",
    }
}

/// Renders the newest notifications, oldest of them on top.
pub fn render_notifications(frame: &mut Frame, area: Rect, app: &App) {
    let notifications = app.controller.notifications();
    if notifications.is_empty() {
        return;
    }
    let hidden = notifications.len().saturating_sub(MAX_VISIBLE);
    let lines: Vec<Line> = notifications
        .iter()
        .skip(hidden)
        .map(|n| {
            let color = kind_color(n.kind);
            Line::from(vec![
                Span::styled(format!(" {} ", kind_icon(n.kind)), Style::default().fg(color)),
                Span::raw(n.message.as_str()),
            ])
        })
        .collect();

    let title = if hidden == 0 {
        format!(" Notifications ({}) · x to dismiss ", notifications.len())
    } else {
        format!(
            " Notifications ({}, {hidden} older hidden) · x to dismiss ",
            notifications.len()
        )
    };
    frame.render_widget(Paragraph::new(lines).block(Block::bordered().title(title)), area);
}
