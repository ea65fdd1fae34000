//! Login screen
//!
//! Email and password form. Only ADMIN users get past it.

use super::centered_popup;
use super::form::{Field, Form};
use super::shell::error_line;
use crate::action::Action;
use crate::component::{Component, Screen};
use crate::model::user::Credentials;
use crate::services::dispatch::{Reply, Request};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::{info, warn};

const EMAIL: usize = 0;
const PASSWORD: usize = 1;

pub const MISSING_CREDENTIALS: &str = "Please enter email and password";
pub const NOT_ADMIN: &str = "You are not admin. Please try again.";
pub const LOGIN_FAILED: &str = "Login failed.";

pub struct LoginScreen {
    form: Form,
    error: Option<String>,
    submitting: bool,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![Field::text("Email"), Field::secret("Password")]),
            error: None,
            submitting: false,
        }
    }

    fn submit(&mut self) -> Option<Action> {
        if self.submitting {
            return None;
        }
        let email = self.form.value(EMAIL).trim().to_string();
        let password = self.form.value(PASSWORD).to_string();
        if email.is_empty() || password.is_empty() {
            self.error = Some(MISSING_CREDENTIALS.to_string());
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some(Action::Send(Request::Login(Credentials { email, password })))
    }
}

impl Component for LoginScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Enter if self.form.is_last_field() => self.submit(),
            KeyCode::Enter => {
                self.form.next_field();
                None
            }
            _ => {
                self.form.handle_key(key);
                None
            }
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 56, 12);
        frame.render_widget(Clear, popup_area);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Sign in with an administrator account",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(self.form.lines(!self.submitting));
        lines.push(Line::from(""));
        if self.submitting {
            lines.push(Line::from(Span::styled(
                "Signing in…",
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(ref error) = self.error {
            lines.push(error_line(error));
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Login ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Left);
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

impl Screen for LoginScreen {
    fn load(&mut self) -> Vec<Request> {
        Vec::new()
    }

    fn apply(&mut self, reply: Reply) -> Option<Action> {
        let Reply::Login(result) = reply else {
            return None;
        };
        self.submitting = false;
        match result {
            Ok(login) if login.user.is_admin() => {
                info!(user = %login.user.email, "admin logged in");
                Some(Action::LoggedIn(login))
            }
            Ok(login) => {
                warn!(user = %login.user.email, "login rejected, not an admin");
                self.error = Some(NOT_ADMIN.to_string());
                None
            }
            Err(e) => {
                warn!(error = %e, "login failed");
                self.error = Some(LOGIN_FAILED.to_string());
                None
            }
        }
    }

    fn is_editing(&self) -> bool {
        true
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("Tab", "Next field"),
            ("Enter", "Sign in"),
            ("Esc", "Quit"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::{LoginResponse, Role, User};
    use crate::services::http::ApiError;
    use crossterm::event::KeyModifiers;

    fn type_text(screen: &mut LoginScreen, text: &str) {
        for c in text.chars() {
            screen
                .handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .unwrap();
        }
    }

    fn press(screen: &mut LoginScreen, code: KeyCode) -> Option<Action> {
        screen
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    fn login(role: Role) -> LoginResponse {
        LoginResponse {
            user: User {
                id: "u1".to_string(),
                email: "a@b.c".to_string(),
                role,
                ..User::default()
            },
            access_token: "t".to_string(),
        }
    }

    #[test]
    fn test_empty_fields_are_rejected_locally() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "a@b.c");
        press(&mut screen, KeyCode::Tab);
        assert_eq!(press(&mut screen, KeyCode::Enter), None);
        assert_eq!(screen.error.as_deref(), Some(MISSING_CREDENTIALS));
    }

    #[test]
    fn test_enter_on_password_sends_login() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, " a@b.c ");
        assert_eq!(press(&mut screen, KeyCode::Enter), None);
        type_text(&mut screen, "secret");

        let action = press(&mut screen, KeyCode::Enter);
        assert_eq!(
            action,
            Some(Action::Send(Request::Login(Credentials {
                email: "a@b.c".to_string(),
                password: "secret".to_string(),
            })))
        );
        // A second Enter while waiting does nothing
        assert_eq!(press(&mut screen, KeyCode::Enter), None);
    }

    #[test]
    fn test_admin_reply_logs_in() {
        let mut screen = LoginScreen::new();
        let action = screen.apply(Reply::Login(Ok(login(Role::Admin))));
        assert_eq!(action, Some(Action::LoggedIn(login(Role::Admin))));
    }

    #[test]
    fn test_non_admin_reply_is_rejected() {
        let mut screen = LoginScreen::new();
        assert_eq!(screen.apply(Reply::Login(Ok(login(Role::User)))), None);
        assert_eq!(screen.error.as_deref(), Some(NOT_ADMIN));
    }

    #[test]
    fn test_failed_reply_shows_generic_error() {
        let mut screen = LoginScreen::new();
        let reply = Reply::Login(Err(ApiError::Status {
            status: 401,
            message: "Wrong password".to_string(),
        }));
        assert_eq!(screen.apply(reply), None);
        assert_eq!(screen.error.as_deref(), Some(LOGIN_FAILED));
        assert!(!screen.submitting);
    }
}
