//! Chapter create/edit dialog shown over the course detail screen

use super::form::{Field, Form};
use super::shell::error_line;
use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::course::{Chapter, ChapterInput};
use crate::services::dispatch::Mutation;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TITLE: usize = 0;
const DESCRIPTION: usize = 1;
const ORDER: usize = 2;

pub const MISSING_TITLE: &str = "Please enter chapter title";

pub struct ChapterDialog {
    course_id: String,
    /// Set when editing an existing chapter
    chapter_id: Option<String>,
    form: Form,
    error: Option<&'static str>,
}

impl Default for ChapterDialog {
    fn default() -> Self {
        Self::open(String::new(), None)
    }
}

impl ChapterDialog {
    /// Fresh dialog for `course_id`, pre-filled from `chapter` when editing
    pub fn open(course_id: String, chapter: Option<&Chapter>) -> Self {
        let (title, description, order) = match chapter {
            Some(c) => (c.title.as_str(), c.description.as_str(), c.order.to_string()),
            None => ("", "", String::new()),
        };
        Self {
            course_id,
            chapter_id: chapter.map(|c| c.id.clone()),
            form: Form::new(vec![
                Field::text("Title").with_value(title),
                Field::text("Description").with_value(description),
                Field::number("Order").with_value(order),
            ]),
            error: None,
        }
    }

    fn submit(&mut self) -> Option<Action> {
        let title = self.form.value(TITLE).trim();
        if title.is_empty() {
            self.error = Some(MISSING_TITLE);
            return None;
        }
        let input = ChapterInput {
            course_id: self.course_id.clone(),
            title: title.to_string(),
            description: self.form.value(DESCRIPTION).trim().to_string(),
            order: self.form.value(ORDER).parse().ok(),
        };
        self.error = None;
        Some(Action::Submit(match self.chapter_id {
            Some(ref chapter_id) => Mutation::UpdateChapter {
                chapter_id: chapter_id.clone(),
                input,
            },
            None => Mutation::CreateChapter(input),
        }))
    }
}

impl Component for ChapterDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
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
        let popup_area = centered_popup(area, 64, 11);
        frame.render_widget(Clear, popup_area);

        let mut lines = vec![Line::from("")];
        lines.extend(self.form.lines(true));
        lines.push(Line::from(""));
        match self.error {
            Some(error) => lines.push(error_line(error)),
            None => lines.push(Line::from(Span::styled(
                "  Enter next/save · Esc cancel",
                Style::default().fg(Color::DarkGray),
            ))),
        }

        let title = if self.chapter_id.is_some() {
            " Edit chapter "
        } else {
            " New chapter "
        };
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(title)
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
