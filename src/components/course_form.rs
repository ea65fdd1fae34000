//! New course form

use super::form::{Field, Form};
use super::shell::error_line;
use crate::action::Action;
use crate::component::{Component, Screen};
use crate::model::course::CourseInput;
use crate::services::dispatch::{Mutation, Reply, Request};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const NAME: usize = 0;
const DESCRIPTION: usize = 1;

pub const MISSING_NAME: &str = "Please enter course name";
pub const MISSING_DESCRIPTION: &str = "Please enter course description";

/// Name and description fields shared by the new-course screen and the
/// course detail info tab
pub fn course_form(name: &str, description: &str) -> Form {
    Form::new(vec![
        Field::text("Name").with_value(name),
        Field::text("Description").with_value(description),
    ])
}

/// Validate the course form into a request body
pub fn course_input(form: &Form) -> Result<CourseInput, &'static str> {
    let name = form.value(NAME).trim();
    let description = form.value(DESCRIPTION).trim();
    if name.is_empty() {
        return Err(MISSING_NAME);
    }
    if description.is_empty() {
        return Err(MISSING_DESCRIPTION);
    }
    Ok(CourseInput {
        name: name.to_string(),
        description: description.to_string(),
    })
}

pub struct NewCourseScreen {
    form: Form,
    error: Option<&'static str>,
}

impl Default for NewCourseScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl NewCourseScreen {
    pub fn new() -> Self {
        Self {
            form: course_form("", ""),
            error: None,
        }
    }

    fn submit(&mut self) -> Option<Action> {
        match course_input(&self.form) {
            Ok(input) => {
                self.error = None;
                Some(Action::Submit(Mutation::CreateCourse(input)))
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }
}

impl Component for NewCourseScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
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
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Create a course",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(self.form.lines(true));
        if let Some(error) = self.error {
            lines.push(Line::from(""));
            lines.push(error_line(error));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" New course ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, area);
        Ok(())
    }
}

impl Screen for NewCourseScreen {
    fn load(&mut self) -> Vec<Request> {
        Vec::new()
    }

    fn apply(&mut self, _reply: Reply) -> Option<Action> {
        None
    }

    fn is_editing(&self) -> bool {
        true
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![("Tab", "Next field"), ("Ctrl+s", "Create"), ("Esc", "Back")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_input_requires_both_fields() {
        assert_eq!(course_input(&course_form(" ", "d")), Err(MISSING_NAME));
        assert_eq!(course_input(&course_form("n", "")), Err(MISSING_DESCRIPTION));
        assert_eq!(
            course_input(&course_form(" Kanji ", "Basics")),
            Ok(CourseInput {
                name: "Kanji".to_string(),
                description: "Basics".to_string(),
            })
        );
    }

    #[test]
    fn test_submit_creates_course() {
        let mut screen = NewCourseScreen::new();
        for c in "N5".chars() {
            screen
                .handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .unwrap();
        }
        let submit = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(screen.handle_key_event(submit).unwrap(), None);
        assert_eq!(screen.error, Some(MISSING_DESCRIPTION));

        screen
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        screen
            .handle_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(
            screen.handle_key_event(submit).unwrap(),
            Some(Action::Submit(Mutation::CreateCourse(CourseInput {
                name: "N5".to_string(),
                description: "x".to_string(),
            })))
        );
    }
}
