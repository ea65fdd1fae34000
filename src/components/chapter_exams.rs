//! Exam manager of one chapter

use super::layout::split_header;
use super::resource_list::{draw_rows, TableRow};
use super::shell::field_line;
use crate::action::Action;
use crate::component::{Component, Screen};
use crate::model::course::Chapter;
use crate::model::exam::Exam;
use crate::model::mutation::PendingMutation;
use crate::model::route::Route;
use crate::services::dispatch::{Reply, Request};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, TableState},
    Frame,
};
use tracing::warn;

impl TableRow for Exam {
    const HEADERS: &'static [&'static str] = &["Name", "Description", "Level", "Minutes"];

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Percentage(35),
            Constraint::Percentage(45),
            Constraint::Length(8),
            Constraint::Length(8),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.description.clone(),
            self.level.as_str().to_string(),
            self.time_exam.to_string(),
        ]
    }
}

pub fn ask_delete_exam(exam: &Exam) -> Action {
    Action::AskConfirm(PendingMutation::DeleteExam {
        exam_id: exam.id.clone(),
        name: exam.name.clone(),
    })
}

pub fn open_exam(exam: &Exam) -> Action {
    Action::Navigate(Route::ExamEditor {
        exam_id: exam.id.clone(),
    })
}

pub struct ChapterExamsScreen {
    chapter_id: String,
    chapter: Option<Chapter>,
    loading: bool,
    selected: usize,
    state: TableState,
}

impl ChapterExamsScreen {
    pub fn new(chapter_id: String) -> Self {
        Self {
            chapter_id,
            chapter: None,
            loading: false,
            selected: 0,
            state: TableState::default(),
        }
    }

    fn exams(&self) -> &[Exam] {
        self.chapter
            .as_ref()
            .map(|c| c.exams.as_slice())
            .unwrap_or_default()
    }

    fn selected_exam(&self) -> Option<&Exam> {
        self.exams().get(self.selected)
    }
}

impl Component for ChapterExamsScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),
            KeyCode::Char('n') => Some(Action::Navigate(Route::NewExam {
                chapter_id: self.chapter_id.clone(),
            })),
            KeyCode::Enter => self.selected_exam().map(open_exam),
            KeyCode::Char('d') => self.selected_exam().map(ask_delete_exam),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let len = self.exams().len();
        if len == 0 {
            return Ok(None);
        }
        match action {
            Action::NextItem => self.selected = (self.selected + 1) % len,
            Action::PrevItem => self.selected = (self.selected + len - 1) % len,
            Action::FirstItem => self.selected = 0,
            Action::LastItem => self.selected = len - 1,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let (header, body) = split_header(area, 5);

        let (title, lines) = match self.chapter {
            Some(ref chapter) => (
                format!(" Chapter: {} ", chapter.title),
                vec![
                    field_line("Order", chapter.order.to_string()),
                    field_line("Description", chapter.description.clone()),
                    field_line("Exams", chapter.exams.len().to_string()),
                ],
            ),
            None => (
                " Chapter ".to_string(),
                vec![field_line(
                    "",
                    if self.loading { "loading…" } else { "Chapter not found" },
                )],
            ),
        };
        let info = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(info, header);

        let exams = self.exams().to_vec();
        self.state
            .select((!exams.is_empty()).then_some(self.selected));
        draw_rows(
            frame,
            body,
            &exams,
            &mut self.state,
            format!(" Exams ({}) ", exams.len()),
            None,
            true,
        );
        Ok(())
    }
}

impl Screen for ChapterExamsScreen {
    fn load(&mut self) -> Vec<Request> {
        self.loading = true;
        vec![Request::Chapter(self.chapter_id.clone())]
    }

    fn apply(&mut self, reply: Reply) -> Option<Action> {
        if let Reply::Chapter(result) = reply {
            self.loading = false;
            match result {
                Ok(chapter) => {
                    if self.selected >= chapter.exams.len() {
                        self.selected = chapter.exams.len().saturating_sub(1);
                    }
                    self.chapter = Some(chapter);
                }
                Err(e) => warn!(chapter_id = %self.chapter_id, error = %e, "chapter fetch failed"),
            }
        }
        None
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("j/k", "Move"),
            ("Enter", "Open exam"),
            ("n", "New exam"),
            ("d", "Delete"),
            ("Esc", "Back"),
            ("?", "Help"),
        ]
    }
}
