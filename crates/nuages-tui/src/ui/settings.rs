//! Account settings view.

use nuages_core::settings::Preference;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::app::App;

/// Renders the profile panel and the preference checklist.
pub fn render_settings(frame: &mut Frame, area: Rect, app: &App) {
    let settings = app.controller.settings();
    let [profile, preferences] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

    let profile_lines = vec![
        Line::from(vec![
            Span::raw("Full name  ").dark_gray(),
            Span::raw(settings.full_name.as_str()),
        ]),
        Line::from(vec![
            Span::raw("Email      ").dark_gray(),
            Span::raw(settings.email.as_str()),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(profile_lines).block(Block::bordered().title(" Profile ")),
        profile,
    );

    let mut lines: Vec<Line> = Preference::ALL
        .iter()
        .enumerate()
        .map(|(i, preference)| {
            let mark = if settings.is_enabled(*preference) {
                "[x]"
            } else {
                "[ ]"
            };
            let style = if i == app.settings_cursor {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::from(format!(" {mark} {}", preference.label())).style(style)
        })
        .collect();
    if settings.is_dirty() {
        lines.push(Line::from(""));
        lines.push(Line::from(" Unsaved changes. Press w to save.").fg(Color::Yellow));
    }
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(" Preferences ")),
        preferences,
    );
}
