//! Container list and detail panel.
//!
//! The left pane lists every container with its status, the right pane
//! shows configuration and live usage of the selected one.

use nuages_core::container::Container;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, Wrap};

use crate::app::App;
use crate::format::format_ram;

/// Renders the container management view.
pub fn render_container_list(frame: &mut Frame, area: Rect, app: &App) {
    let containers = app.controller.containers();
    if containers.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from("No Nuages yet. Press n to create your first Nuage.").dark_gray(),
        ])
        .centered()
        .block(Block::bordered().title(" My Nuages "));
        frame.render_widget(empty, area);
        return;
    }

    let [list_area, detail_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);

    let items: Vec<ListItem> = containers
        .iter()
        .map(|c| {
            let (dot, color) = if c.is_running() {
                ("●", Color::Green)
            } else {
                ("○", Color::Red)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {dot} "), Style::default().fg(color)),
                Span::raw(c.name.as_str()),
                Span::raw(format!("  #{}", c.id)).dark_gray(),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::bordered().title(format!(" My Nuages ({}) ", containers.len())))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(list, list_area, &mut state);

    if let Some(container) = app.selected_container() {
        render_detail(frame, detail_area, container);
    }
}

fn render_detail(frame: &mut Frame, area: Rect, container: &Container) {
    let status = if container.is_running() {
        Span::styled("Running", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("Stopped", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
    };
    let services = container
        .services
        .iter()
        .map(|s| s.id())
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        field("Domain", container.domain.clone()),
        field("Image", container.image.display_name().to_string()),
        field("Created", container.created_at.clone()),
        Line::from(vec![Span::raw("Status   ").dark_gray(), status]),
    ];
    if container.is_running() {
        lines.push(field("Uptime", container.uptime.clone()));
        lines.push(field(
            "RAM",
            format_ram(container.ram.used, container.ram.total),
        ));
        lines.push(field("CPU", format!("{}%", container.cpu)));
    }
    lines.push(field(
        "Services",
        if services.is_empty() {
            "none".to_string()
        } else {
            services
        },
    ));
    lines.push(Line::from(""));
    lines.push(Line::from("s start/stop · d delete").dark_gray());

    let title = format!(" {} ", container.name);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().title(title)),
        area,
    );
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{label:<9}")).dark_gray(),
        Span::raw(value),
    ])
}
