//! Course detail: info form, chapter list and exam list in tabs

use super::chapter_exams::{ask_delete_exam, open_exam};
use super::course_form::{course_form, course_input};
use super::form::Form;
use super::layout::split_header;
use super::resource_list::{ResourceList, TableRow};
use super::shell::{error_line, field_line};
use crate::action::Action;
use crate::component::{Component, Screen};
use crate::model::course::{Chapter, Course};
use crate::model::exam::Exam;
use crate::model::mutation::PendingMutation;
use crate::model::route::Route;
use crate::services::chapter::COURSE_FILTER;
use crate::services::dispatch::{Mutation, Reply, Request};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use tracing::warn;

impl TableRow for Chapter {
    const HEADERS: &'static [&'static str] = &["#", "Title", "Description", "Exams"];

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Length(4),
            Constraint::Percentage(35),
            Constraint::Percentage(50),
            Constraint::Length(6),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.order.to_string(),
            self.title.clone(),
            self.description.clone(),
            self.exams.len().to_string(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Info,
    Chapters,
    Exams,
}

impl DetailTab {
    pub fn all() -> [DetailTab; 3] {
        [DetailTab::Info, DetailTab::Chapters, DetailTab::Exams]
    }

    pub fn name(&self) -> &'static str {
        match self {
            DetailTab::Info => "Info",
            DetailTab::Chapters => "Chapters",
            DetailTab::Exams => "Exams",
        }
    }

    pub fn next(&self) -> DetailTab {
        match self {
            DetailTab::Info => DetailTab::Chapters,
            DetailTab::Chapters => DetailTab::Exams,
            DetailTab::Exams => DetailTab::Info,
        }
    }

    pub fn previous(&self) -> DetailTab {
        match self {
            DetailTab::Info => DetailTab::Exams,
            DetailTab::Chapters => DetailTab::Info,
            DetailTab::Exams => DetailTab::Chapters,
        }
    }
}

pub struct CourseDetailScreen {
    course_id: String,
    tab: DetailTab,
    course: Option<Course>,
    loading: bool,
    form: Form,
    /// Info form captures input
    editing: bool,
    error: Option<&'static str>,
    chapters: ResourceList<Chapter>,
    exams: ResourceList<Exam>,
}

impl CourseDetailScreen {
    pub fn new(course_id: String, page_size: u32) -> Self {
        let mut chapters = ResourceList::new("Chapters", page_size);
        chapters.listing.set_fixed_filter(COURSE_FILTER, &course_id);
        Self {
            course_id,
            tab: DetailTab::Info,
            course: None,
            loading: false,
            form: course_form("", ""),
            editing: false,
            error: None,
            chapters,
            exams: ResourceList::new("Exams", page_size),
        }
    }

    fn reset_form(&mut self) {
        let (name, description) = self
            .course
            .as_ref()
            .map(|c| (c.name.as_str(), c.description.as_str()))
            .unwrap_or_default();
        self.form = course_form(name, description);
        self.error = None;
    }

    fn submit_info(&mut self) -> Option<Action> {
        match course_input(&self.form) {
            Ok(input) => {
                self.editing = false;
                self.error = None;
                Some(Action::Submit(Mutation::UpdateCourse {
                    course_id: self.course_id.clone(),
                    input,
                }))
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    fn handle_info_edit_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.editing = false;
                self.reset_form();
                None
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_info()
            }
            KeyCode::Enter if self.form.is_last_field() => self.submit_info(),
            KeyCode::Enter => {
                self.form.next_field();
                None
            }
            _ => {
                self.form.handle_key(key);
                None
            }
        }
    }

    fn handle_chapter_key(&self, key: KeyEvent) -> Option<Action> {
        if let Some(action) = self.chapters.handle_key_event(key) {
            return Some(action);
        }
        if key.code == KeyCode::Char('n') {
            return Some(Action::OpenChapterForm {
                course_id: self.course_id.clone(),
                chapter: None,
            });
        }
        let chapter = self.chapters.selected()?;
        match key.code {
            KeyCode::Enter => Some(Action::Navigate(Route::ChapterExams {
                chapter_id: chapter.id.clone(),
            })),
            KeyCode::Char('e') => Some(Action::OpenChapterForm {
                course_id: self.course_id.clone(),
                chapter: Some(chapter.clone()),
            }),
            KeyCode::Char('d') => Some(Action::AskConfirm(PendingMutation::DeleteChapter {
                chapter_id: chapter.id.clone(),
                title: chapter.title.clone(),
            })),
            _ => None,
        }
    }

    fn handle_exam_key(&self, key: KeyEvent) -> Option<Action> {
        if let Some(action) = self.exams.handle_key_event(key) {
            return Some(action);
        }
        let exam = self.exams.selected()?;
        match key.code {
            KeyCode::Enter => Some(open_exam(exam)),
            KeyCode::Char('d') => Some(ask_delete_exam(exam)),
            _ => None,
        }
    }

    fn draw_tabs(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<&str> = DetailTab::all().iter().map(|t| t.name()).collect();
        let selected = DetailTab::all()
            .iter()
            .position(|t| *t == self.tab)
            .unwrap_or(0);
        let title = self
            .course
            .as_ref()
            .map(|c| format!(" {} ", c.name))
            .unwrap_or_else(|| " Course ".to_string());

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .select(selected)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn draw_info(&self, frame: &mut Frame, area: Rect) {
        let mut lines = self.form.lines(self.editing);
        lines.push(Line::from(""));
        match self.course {
            Some(ref course) => {
                lines.push(field_line("Chapters", course.chapters.len().to_string()));
                lines.push(field_line(
                    "Exams",
                    course
                        .chapters
                        .iter()
                        .map(|c| c.exams.len())
                        .sum::<usize>()
                        .to_string(),
                ));
                let date = |at: Option<chrono::DateTime<chrono::Utc>>| {
                    at.map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_default()
                };
                lines.push(field_line("Created", date(course.created_at)));
                lines.push(field_line("Updated", date(course.updated_at)));
            }
            None if self.loading => lines.push(Line::from("loading…")),
            None => lines.push(Line::from("Course not found")),
        }
        if let Some(error) = self.error {
            lines.push(Line::from(""));
            lines.push(error_line(error));
        }

        let border = if self.editing { Color::Cyan } else { Color::DarkGray };
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Info ")
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(paragraph, area);
    }
}

impl Component for CourseDetailScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.editing {
            return Ok(self.handle_info_edit_key(key));
        }
        let searching = match self.tab {
            DetailTab::Chapters => self.chapters.is_searching(),
            DetailTab::Exams => self.exams.is_searching(),
            DetailTab::Info => false,
        };
        if !searching {
            match key.code {
                KeyCode::Tab => return Ok(Some(Action::NextTab)),
                KeyCode::BackTab => return Ok(Some(Action::PrevTab)),
                _ => {}
            }
        }

        let action = match self.tab {
            DetailTab::Info => match key.code {
                KeyCode::Char('e') | KeyCode::Enter if self.course.is_some() => {
                    self.editing = true;
                    None
                }
                _ => None,
            },
            DetailTab::Chapters => self.handle_chapter_key(key),
            DetailTab::Exams => self.handle_exam_key(key),
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextTab => self.tab = self.tab.next(),
            Action::PrevTab => self.tab = self.tab.previous(),
            _ => match self.tab {
                DetailTab::Chapters => {
                    return Ok(self
                        .chapters
                        .update(&action)
                        .map(|query| Action::Send(Request::Chapters(query))));
                }
                DetailTab::Exams => {
                    let course_id = self.course_id.clone();
                    return Ok(self.exams.update(&action).map(|query| {
                        Action::Send(Request::Exams { course_id, query })
                    }));
                }
                DetailTab::Info => {}
            },
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let (tabs, body) = split_header(area, 3);
        self.draw_tabs(frame, tabs);
        match self.tab {
            DetailTab::Info => self.draw_info(frame, body),
            DetailTab::Chapters => self.chapters.draw(frame, body, true),
            DetailTab::Exams => self.exams.draw(frame, body, true),
        }
        Ok(())
    }
}

impl Screen for CourseDetailScreen {
    fn load(&mut self) -> Vec<Request> {
        self.loading = true;
        vec![
            Request::Course(self.course_id.clone()),
            Request::Chapters(self.chapters.begin_fetch()),
            Request::Exams {
                course_id: self.course_id.clone(),
                query: self.exams.begin_fetch(),
            },
        ]
    }

    fn apply(&mut self, reply: Reply) -> Option<Action> {
        match reply {
            Reply::Course(result) => {
                self.loading = false;
                match result {
                    Ok(course) => {
                        self.course = Some(course);
                        if !self.editing {
                            self.reset_form();
                        }
                    }
                    Err(e) => warn!(course_id = %self.course_id, error = %e, "course fetch failed"),
                }
            }
            Reply::Chapters(result) => self.chapters.apply(result),
            Reply::Exams(result) => self.exams.apply(result),
            _ => {}
        }
        None
    }

    fn is_editing(&self) -> bool {
        self.editing
            || match self.tab {
                DetailTab::Chapters => self.chapters.is_searching(),
                DetailTab::Exams => self.exams.is_searching(),
                DetailTab::Info => false,
            }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.editing {
            return vec![("Tab", "Next field"), ("Ctrl+s", "Save"), ("Esc", "Cancel")];
        }
        if self.is_editing() {
            return vec![("Enter", "Search"), ("Esc", "Cancel")];
        }
        match self.tab {
            DetailTab::Info => vec![("Tab", "Next tab"), ("e", "Edit"), ("Esc", "Back"), ("?", "Help")],
            DetailTab::Chapters => vec![
                ("Tab", "Next tab"),
                ("j/k", "Move"),
                ("Enter", "Exams"),
                ("n", "New"),
                ("e", "Edit"),
                ("d", "Delete"),
                ("Esc", "Back"),
            ],
            DetailTab::Exams => vec![
                ("Tab", "Next tab"),
                ("j/k", "Move"),
                ("Enter", "Open"),
                ("d", "Delete"),
                ("Esc", "Back"),
            ],
        }
    }
}
