//! Terminal event handling.
//!
//! Captures keyboard and resize events from the terminal and dispatches
//! them to the application state.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use nuages_core::action::ActionOutcome;
use nuages_core::view::{View, ViewSelection};

use crate::app::{App, FormFocus};

/// Terminal input events.
#[derive(Debug, Clone)]
pub enum TerminalEvent {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// No input arrived before the timeout.
    Tick,
}

/// Waits up to `timeout` for the next relevant terminal event.
///
/// # Errors
///
/// Returns an error if polling or reading the terminal fails.
pub fn next_event(timeout: Duration) -> std::io::Result<TerminalEvent> {
    if !event::poll(timeout)? {
        return Ok(TerminalEvent::Tick);
    }
    Ok(match event::read()? {
        Event::Key(key) => TerminalEvent::Key(key),
        Event::Resize(width, height) => TerminalEvent::Resize(width, height),
        _ => TerminalEvent::Tick,
    })
}

/// Applies one key press to the application.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }
    if app.controller.is_create_form_open() {
        handle_form_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('1') => app.change_view(ViewSelection::Dashboard),
        KeyCode::Char('2') => app.change_view(ViewSelection::Containers),
        KeyCode::Char('3') => app.change_view(ViewSelection::Settings),
        KeyCode::Char('n' | '+') => app.change_view(ViewSelection::Create),
        KeyCode::Char('x') => app.dismiss_oldest(),
        _ => match app.controller.active_view() {
            View::Containers => handle_containers_key(app, key),
            View::Settings => handle_settings_key(app, key),
            View::Dashboard => {}
        },
    }
}

fn handle_containers_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Char('s') => app.toggle_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.move_settings_cursor(true),
        KeyCode::Up | KeyCode::Char('k') => app.move_settings_cursor(false),
        KeyCode::Char(' ') => app.toggle_preference_at_cursor(),
        KeyCode::Char('w') => app.controller.settings_mut().save(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            let _ = app.controller.close_create_form();
            return;
        }
        KeyCode::Enter => {
            if let ActionOutcome::Rejected(errors) = app.submit_form() {
                tracing::debug!(%errors, "creation form rejected");
                app.form_focus = FormFocus::Name;
            }
            return;
        }
        KeyCode::Tab => {
            app.form_focus = app.form_focus.next();
            return;
        }
        KeyCode::BackTab => {
            app.form_focus = app.form_focus.previous();
            return;
        }
        _ => {}
    }

    match app.form_focus {
        FormFocus::Name => {
            let Some(form) = app.controller.create_form_mut() else {
                return;
            };
            match key.code {
                KeyCode::Char(c) => form.push_name_char(c),
                KeyCode::Backspace => form.pop_name_char(),
                _ => {}
            }
        }
        FormFocus::Image => {
            let Some(form) = app.controller.create_form_mut() else {
                return;
            };
            match key.code {
                KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | 'j') => form.cycle_image(true),
                KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => form.cycle_image(false),
                _ => {}
            }
        }
        FormFocus::Services => match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.move_service_cursor(true),
            KeyCode::Up | KeyCode::Char('k') => app.move_service_cursor(false),
            KeyCode::Char(' ') => app.toggle_service_at_cursor(),
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use nuages_common::catalog::{BaseImage, Service};
    use nuages_common::config::NuagesConfig;
    use nuages_common::types::{ContainerStatus, NotificationKind};
    use nuages_core::controller::Controller;
    use nuages_core::metrics::FixedCpu;

    use super::*;

    fn app() -> App {
        App::new(Controller::new(&NuagesConfig::default(), Box::new(FixedCpu(15))))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn number_keys_switch_views() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.controller.active_view(), View::Containers);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.controller.active_view(), View::Settings);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.controller.active_view(), View::Dashboard);
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);

        let mut app = self::app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.running);
    }

    #[test]
    fn container_keys_drive_lifecycle() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.controller.containers()[1].status, ContainerStatus::Running);
        assert_eq!(app.controller.containers()[1].cpu, 15);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.controller.containers().len(), 1);
        let last = app.controller.notifications().last().unwrap();
        assert_eq!(last.kind, NotificationKind::Warning);
        assert!(last.message.contains("api-server"));
    }

    #[test]
    fn lifecycle_keys_do_nothing_on_dashboard() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.controller.containers().len(), 2);
        assert_eq!(app.controller.notifications().len(), 1);
    }

    #[test]
    fn x_dismisses_a_notification() {
        let mut app = app();
        press(&mut app, KeyCode::Char('x'));
        assert!(app.controller.notifications().is_empty());
        press(&mut app, KeyCode::Char('x'));
        assert!(app.controller.notifications().is_empty());
    }

    #[test]
    fn form_typing_is_not_captured_by_global_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        assert!(app.controller.is_create_form_open());
        type_text(&mut app, "q1x");
        assert!(app.running);
        assert_eq!(app.controller.create_form().unwrap().draft().name, "q1x");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.controller.create_form().unwrap().draft().name, "q1");
    }

    #[test]
    fn full_form_flow_creates_container() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "shop");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);

        assert!(!app.controller.is_create_form_open());
        let shop = app.selected_container().unwrap();
        assert_eq!(shop.name, "shop");
        assert_eq!(shop.image, BaseImage::Debian12);
        assert!(shop.services.contains(&Service::Nginx));
        assert!(shop.services.contains(&Service::Apache));
        assert_eq!(app.controller.active_view(), View::Containers);
    }

    #[test]
    fn invalid_submit_keeps_form_and_refocuses_name() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Bad");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert!(app.controller.is_create_form_open());
        assert_eq!(app.form_focus, FormFocus::Name);
        assert!(app.controller.create_form().unwrap().name_error().is_some());
        assert_eq!(app.controller.containers().len(), 2);
    }

    #[test]
    fn escape_cancels_form() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "draft");
        press(&mut app, KeyCode::Esc);
        assert!(!app.controller.is_create_form_open());
        assert!(app.running);
        assert_eq!(app.controller.containers().len(), 2);
    }

    #[test]
    fn settings_keys_toggle_and_save() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.controller.settings().email_alerts);
        assert!(app.controller.settings().is_dirty());
        press(&mut app, KeyCode::Char('w'));
        assert!(!app.controller.settings().is_dirty());
    }
}
