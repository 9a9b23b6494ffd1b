//! Dashboard overview.
//!
//! Stat cards on top, the most recent containers below.

use nuages_core::summary::recent_activity;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::app::App;
use crate::ui::metrics;

/// Renders the dashboard view.
pub fn render_dashboard(frame: &mut Frame, area: Rect, app: &App) {
    let [stats, recent] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

    metrics::render_stats(frame, stats, &app.controller.summary());

    let containers = recent_activity(app.controller.containers());
    let lines: Vec<Line> = if containers.is_empty() {
        vec![Line::from("No Nuages yet. Press n to create your first Nuage.").dark_gray()]
    } else {
        containers
            .iter()
            .map(|c| {
                let status = if c.is_running() {
                    Span::styled(format!("up {}", c.uptime), Style::default().fg(Color::Green))
                } else {
                    Span::styled("Stopped", Style::default().fg(Color::Red))
                };
                Line::from(vec![
                    Span::raw(format!(" {:<24}", c.name)).bold(),
                    Span::raw(format!("{:<48}", c.domain)).dark_gray(),
                    status,
                ])
            })
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(" Recent Activity ")),
        recent,
    );
}
