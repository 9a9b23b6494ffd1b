//! Creation form modal.
//!
//! Drawn over the active view while the form is open. The focused input
//! gets a highlighted border.

use nuages_common::catalog::{BaseImage, Service};
use nuages_core::form::CreationForm;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::app::{App, FormFocus};
use crate::ui::centered_rect;

/// Renders the modal for the given form.
pub fn render_create_form(frame: &mut Frame, app: &App, form: &CreationForm) {
    let area = centered_rect(80, 80, frame.area());
    frame.render_widget(Clear, area);
    let outer = Block::bordered()
        .title(" Create New Nuage ".bold())
        .border_style(Style::default().fg(Color::Blue));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    #[allow(clippy::cast_possible_truncation)]
    let [name, error, preview, image, services] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(BaseImage::ALL.len() as u16 + 2),
        Constraint::Min(0),
    ])
    .areas(inner);

    let draft = form.draft();
    let cursor = if app.form_focus == FormFocus::Name {
        "_"
    } else {
        ""
    };
    frame.render_widget(
        Paragraph::new(format!("{}{cursor}", draft.name)).block(input_block(
            " Container name ",
            app.form_focus == FormFocus::Name,
        )),
        name,
    );

    if let Some(err) = form.name_error() {
        frame.render_widget(
            Paragraph::new(Line::from(format!(" {err}")).fg(Color::Red)),
            error,
        );
    }

    let suffix = app.controller.domain_suffix();
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" Your container will be accessible at: ").dark_gray(),
            Span::raw(form.preview_domain(suffix)).fg(Color::Cyan),
        ])),
        preview,
    );

    let image_lines: Vec<Line> = BaseImage::ALL
        .iter()
        .map(|img| {
            let mark = if *img == draft.image { "(•)" } else { "( )" };
            Line::from(vec![
                Span::raw(format!(" {mark} {:<16}", img.display_name())),
                Span::raw(img.description()).dark_gray(),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(image_lines).block(input_block(
            " Base image ",
            app.form_focus == FormFocus::Image,
        )),
        image,
    );

    let focused = app.form_focus == FormFocus::Services;
    let service_lines: Vec<Line> = Service::ALL
        .iter()
        .enumerate()
        .map(|(i, service)| {
            let mark = if draft.services.contains(service) {
                "[x]"
            } else {
                "[ ]"
            };
            let line = Line::from(vec![
                Span::raw(format!(" {mark} {:<12}", service.display_name())),
                Span::raw(service.description()).dark_gray(),
            ]);
            if focused && i == app.service_cursor {
                line.style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                line
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(service_lines).block(input_block(" Services ", focused)),
        services,
    );
}

fn input_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::bordered().title(title).border_style(style)
}
