//! Rendering of the dashboard views.

pub mod container;
pub mod dashboard;
pub mod form;
pub mod metrics;
pub mod notifications;
pub mod settings;

use nuages_core::view::View;
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Tabs};

use crate::app::App;

/// Draws the whole screen for the current state.
pub fn render(frame: &mut Frame, app: &App) {
    let [header, notes, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(notifications::height(app)),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, app);
    notifications::render_notifications(frame, notes, app);
    match app.controller.active_view() {
        View::Dashboard => dashboard::render_dashboard(frame, body, app),
        View::Containers => container::render_container_list(frame, body, app),
        View::Settings => settings::render_settings(frame, body, app),
    }
    render_footer(frame, footer, app);

    if let Some(form) = app.controller.create_form() {
        form::render_create_form(frame, app, form);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.controller.active_view();
    let titles = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| format!(" {} {} ", i + 1, view.title()));
    let selected = View::ALL.iter().position(|v| *v == active).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::bordered().title(" Ti Kloud Réunion · Nuages ".bold()))
        .highlight_style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.controller.is_create_form_open() {
        "Tab next field · Enter create · Esc cancel"
    } else {
        match app.controller.active_view() {
            View::Dashboard => "1-3 views · n new nuage · x dismiss · q quit",
            View::Containers => "j/k select · s start/stop · d delete · n new · x dismiss · q quit",
            View::Settings => "j/k select · space toggle · w save · x dismiss · q quit",
        }
    };
    frame.render_widget(Paragraph::new(Line::from(hints).dark_gray()), area);
}

/// Rectangle of the given percentage size centered in `area`.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
