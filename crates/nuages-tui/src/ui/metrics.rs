//! Summary stat cards shown on the dashboard.
//!
//! Renders running count, memory usage, average CPU and total containers.

use nuages_core::summary::DashboardSummary;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::format::{format_gb, format_percent};

/// Renders the four stat cards side by side.
pub fn render_stats(frame: &mut Frame, area: Rect, summary: &DashboardSummary) {
    let cards = [
        (
            "Active Nuages",
            format!("{} / {}", summary.running, summary.total),
            Color::Blue,
        ),
        ("Total RAM Usage", format_gb(summary.ram_used_mb), Color::Green),
        ("Average CPU", format_percent(summary.average_cpu), Color::Yellow),
        ("Total Containers", summary.total.to_string(), Color::Magenta),
    ];
    let areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for ((label, value, color), card) in cards.into_iter().zip(areas.iter()) {
        let body = vec![
            Line::from(label).dark_gray(),
            Line::from(value).style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ];
        frame.render_widget(Paragraph::new(body).block(Block::bordered()), *card);
    }
}
