//! Exam editor screen
//!
//! Keyboard front end over [`ExamEditor`]. Focus moves between the exam
//! fields, the selected question and its options; Enter starts editing the
//! focused text and Enter again commits it. Nothing is sent until Ctrl+s.

use super::shell::field_line;
use crate::action::Action;
use crate::component::{Component, Screen};
use crate::model::editor::{CorrectAnswer, EditorError, ExamEditor, QuestionDraft};
use crate::model::exam::QuestionType;
use crate::model::notice::Notice;
use crate::services::dispatch::{Mutation, Reply, Request};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use tracing::warn;

/// Part of the editor receiving keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Name,
    Level,
    Time,
    Description,
    Question,
    Kind,
    Options,
    Answer,
}

impl Focus {
    const ORDER: [Focus; 8] = [
        Focus::Name,
        Focus::Level,
        Focus::Time,
        Focus::Description,
        Focus::Question,
        Focus::Kind,
        Focus::Options,
        Focus::Answer,
    ];

    fn label(&self) -> &'static str {
        match self {
            Focus::Name => "Name",
            Focus::Level => "Level",
            Focus::Time => "Minutes",
            Focus::Description => "Description",
            Focus::Question => "Question",
            Focus::Kind => "Type",
            Focus::Options => "Options",
            Focus::Answer => "Answer order",
        }
    }

    /// Text fields that open an input buffer on Enter
    fn is_text(&self) -> bool {
        matches!(
            self,
            Focus::Name | Focus::Time | Focus::Description | Focus::Question | Focus::Options
        )
    }
}

pub struct ExamEditorScreen {
    exam_id: Option<String>,
    /// `None` until an existing exam has loaded
    editor: Option<ExamEditor>,
    loading: bool,
    focus: Focus,
    /// Text being typed into the focused field
    input: Option<String>,
    option_cursor: usize,
    answer_cursor: usize,
}

impl ExamEditorScreen {
    /// Editor for a new exam in `chapter_id`
    pub fn create(chapter_id: String) -> Self {
        Self {
            exam_id: None,
            editor: Some(ExamEditor::new(Some(chapter_id))),
            loading: false,
            focus: Focus::Name,
            input: None,
            option_cursor: 0,
            answer_cursor: 0,
        }
    }

    /// Editor for an existing exam, filled once the exam arrives
    pub fn edit(exam_id: String) -> Self {
        Self {
            exam_id: Some(exam_id),
            editor: None,
            ..Self::create(String::new())
        }
    }

    fn question(&self) -> Option<&QuestionDraft> {
        self.editor.as_ref().and_then(ExamEditor::current)
    }

    fn is_arrange(&self) -> bool {
        self.question()
            .is_some_and(|q| q.kind == QuestionType::Arrange)
    }

    fn sequence_len(&self) -> usize {
        match self.question().map(|q| &q.answer) {
            Some(CorrectAnswer::Sequence(ids)) => ids.len(),
            _ => 0,
        }
    }

    fn clamp_cursors(&mut self) {
        let options = self.question().map_or(0, |q| q.options.len());
        self.option_cursor = self.option_cursor.min(options.saturating_sub(1));
        self.answer_cursor = self.answer_cursor.min(self.sequence_len().saturating_sub(1));
        if self.focus == Focus::Answer && !self.is_arrange() {
            self.focus = Focus::Options;
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let len = Focus::ORDER.len();
        let mut index = Focus::ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        loop {
            index = if forward {
                (index + 1) % len
            } else {
                (index + len - 1) % len
            };
            let next = Focus::ORDER[index];
            if next != Focus::Answer || self.is_arrange() {
                self.focus = next;
                return;
            }
        }
    }

    /// Current text of the focused field, used to seed the input buffer
    fn focused_text(&self) -> Option<String> {
        let editor = self.editor.as_ref()?;
        match self.focus {
            Focus::Name => Some(editor.info.name.clone()),
            Focus::Time => Some(editor.info.time_exam.to_string()),
            Focus::Description => Some(editor.info.description.clone()),
            Focus::Question => self.question().map(|q| q.content.clone()),
            Focus::Options => self
                .question()
                .and_then(|q| q.options.get(self.option_cursor))
                .map(|o| o.content.clone()),
            _ => None,
        }
    }

    fn failed(error: EditorError) -> Option<Action> {
        Some(Action::Notify(Notice::error(error.to_string())))
    }

    /// Run an editor operation, turning its error into a notice
    fn edit_with<F>(&mut self, op: F) -> Option<Action>
    where
        F: FnOnce(&mut ExamEditor, &Self) -> Result<(), EditorError>,
    {
        let mut editor = self.editor.take()?;
        let result = op(&mut editor, self);
        self.editor = Some(editor);
        self.clamp_cursors();
        result.err().and_then(Self::failed)
    }

    fn commit_input(&mut self) -> Option<Action> {
        let value = self.input.take()?;
        let cursor = self.option_cursor;
        let focus = self.focus;
        self.edit_with(|editor, _| match focus {
            Focus::Name => {
                editor.info.name = value;
                Ok(())
            }
            Focus::Time => {
                editor.info.time_exam = value.parse().unwrap_or(0);
                Ok(())
            }
            Focus::Description => {
                editor.info.description = value;
                Ok(())
            }
            Focus::Question => editor.set_question_content(&value),
            Focus::Options => {
                let id = editor
                    .current()
                    .and_then(|q| q.options.get(cursor))
                    .map(|o| o.id)
                    .ok_or(EditorError::NoQuestion)?;
                editor.edit_option(id, &value)
            }
            _ => Ok(()),
        })
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Option<Action> {
        let focus = self.focus;
        let buffer = self.input.as_mut()?;
        match key.code {
            KeyCode::Enter => return self.commit_input(),
            KeyCode::Esc => self.input = None,
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            KeyCode::Char(c) => {
                if focus != Focus::Time || c.is_ascii_digit() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        None
    }

    fn submit(&self) -> Option<Action> {
        let editor = self.editor.as_ref()?;
        match editor.to_request() {
            Ok(request) => Some(Action::Submit(match self.exam_id {
                Some(ref exam_id) => Mutation::UpdateExam {
                    exam_id: exam_id.clone(),
                    request,
                },
                None => Mutation::CreateExam(request),
            })),
            Err(e) => Self::failed(e),
        }
    }

    fn handle_focus_key(&mut self, key: KeyEvent) -> Option<Action> {
        match (self.focus, key.code) {
            (Focus::Level, KeyCode::Left | KeyCode::Char('h')) => {
                self.edit_with(|editor, _| {
                    editor.info.level = editor.info.level.previous();
                    Ok(())
                })
            }
            (Focus::Level, KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ')) => {
                self.edit_with(|editor, _| {
                    editor.info.level = editor.info.level.next();
                    Ok(())
                })
            }
            (Focus::Kind, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) => {
                self.edit_with(|editor, _| {
                    let kind = editor
                        .current()
                        .map(|q| q.kind.toggled())
                        .ok_or(EditorError::NoQuestion)?;
                    editor.change_type(kind)
                })
            }
            (Focus::Options, KeyCode::Char('j') | KeyCode::Down) => {
                self.option_cursor += 1;
                self.clamp_cursors();
                None
            }
            (Focus::Options, KeyCode::Char('k') | KeyCode::Up) => {
                self.option_cursor = self.option_cursor.saturating_sub(1);
                None
            }
            (Focus::Options, KeyCode::Char('a')) => {
                let action = self.edit_with(|editor, _| editor.add_option().map(|_| ()));
                if action.is_none() && self.editor.is_some() {
                    self.option_cursor =
                        self.question().map_or(0, |q| q.options.len().saturating_sub(1));
                    self.input = Some(String::new());
                }
                action
            }
            (Focus::Options, KeyCode::Char('x')) => self.edit_with(|editor, screen| {
                let id = editor
                    .current()
                    .and_then(|q| q.options.get(screen.option_cursor))
                    .map(|o| o.id)
                    .ok_or(EditorError::NoQuestion)?;
                editor.delete_option(id)
            }),
            (Focus::Options, KeyCode::Char(' ')) => self.edit_with(|editor, screen| {
                let id = editor
                    .current()
                    .and_then(|q| q.options.get(screen.option_cursor))
                    .map(|o| o.id)
                    .ok_or(EditorError::NoQuestion)?;
                editor.set_correct_answer(id)
            }),
            (Focus::Answer, KeyCode::Char('j') | KeyCode::Down) => {
                self.answer_cursor += 1;
                self.clamp_cursors();
                None
            }
            (Focus::Answer, KeyCode::Char('k') | KeyCode::Up) => {
                self.answer_cursor = self.answer_cursor.saturating_sub(1);
                None
            }
            (Focus::Answer, KeyCode::Char('K')) if self.answer_cursor > 0 => {
                let from = self.answer_cursor;
                let action = self.edit_with(|editor, _| editor.move_answer(from, from - 1));
                if action.is_none() {
                    self.answer_cursor -= 1;
                }
                action
            }
            (Focus::Answer, KeyCode::Char('J')) => {
                let from = self.answer_cursor;
                if from + 1 >= self.sequence_len() {
                    return None;
                }
                let action = self.edit_with(|editor, _| editor.move_answer(from, from + 1));
                if action.is_none() {
                    self.answer_cursor += 1;
                }
                action
            }
            (focus, KeyCode::Enter) if focus.is_text() => {
                self.input = self.focused_text();
                None
            }
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    fn field(&self, focus: Focus, value: String) -> Line<'static> {
        let focused = self.focus == focus;
        let value = match self.input {
            Some(ref buffer) if focused && focus != Focus::Options => format!("{}_", buffer),
            _ => value,
        };
        let (marker, label_style) = if focused {
            (
                "> ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(Color::DarkGray))
        };
        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(format!("{:<13}", focus.label()), label_style),
            Span::styled(value, Style::default().fg(Color::White)),
        ])
    }

    fn draw_info(&self, frame: &mut Frame, area: Rect, editor: &ExamEditor) {
        let lines = vec![
            self.field(Focus::Name, editor.info.name.clone()),
            self.field(Focus::Level, format!("◀ {} ▶", editor.info.level.as_str())),
            self.field(Focus::Time, editor.info.time_exam.to_string()),
            self.field(Focus::Description, editor.info.description.clone()),
        ];
        let title = if editor.is_new() { " New exam " } else { " Exam " };
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_question_list(&self, frame: &mut Frame, area: Rect, editor: &ExamEditor) {
        let items: Vec<ListItem> = editor
            .questions()
            .iter()
            .map(|q| {
                let content = if q.content.is_empty() {
                    "(no content)".to_string()
                } else {
                    q.content.clone()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>3}. ", q.order), Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        match q.kind {
                            QuestionType::Mcq => "MCQ ",
                            QuestionType::Arrange => "ARR ",
                        },
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(content),
                ]))
            })
            .collect();

        let mut state = ListState::default();
        state.select(
            editor
                .questions()
                .iter()
                .position(|q| q.order == editor.current_order()),
        );
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Questions ({}) ", editor.questions().len()))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_question(&self, frame: &mut Frame, area: Rect, editor: &ExamEditor) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(
                " Question {}/{} ",
                editor.current_order(),
                editor.max_order()
            ))
            .border_style(Style::default().fg(Color::DarkGray));

        let Some(question) = editor.current() else {
            frame.render_widget(
                Paragraph::new("No questions yet. Press n to add one.").block(block),
                area,
            );
            return;
        };

        let mut lines = vec![
            self.field(Focus::Kind, format!("◀ {} ▶", question.kind.label())),
            self.field(Focus::Question, question.content.clone()),
            Line::from(""),
            self.field(Focus::Options, String::new()),
        ];

        for (index, option) in question.options.iter().enumerate() {
            let at_cursor = self.focus == Focus::Options && index == self.option_cursor;
            let correct = question.kind == QuestionType::Mcq
                && question.answer_text() == Some(option.content.as_str())
                && !option.content.is_empty();
            let text = match self.input {
                Some(ref buffer) if at_cursor => format!("{}_", buffer),
                _ if option.content.is_empty() => "(empty)".to_string(),
                _ => option.content.clone(),
            };
            lines.push(Line::from(vec![
                Span::styled(
                    if at_cursor { "  ▶ " } else { "    " },
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    if correct { "✓ " } else { "  " },
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{}. ", option.id), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    text,
                    if correct {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default().fg(Color::White)
                    },
                ),
            ]));
        }

        if question.kind == QuestionType::Arrange {
            lines.push(Line::from(""));
            let mut header = self.field(Focus::Answer, String::new());
            if question.initial_order {
                header.spans.push(Span::styled(
                    "(option order)",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(header);
            for (index, content) in question.arranged_contents().into_iter().enumerate() {
                let at_cursor = self.focus == Focus::Answer && index == self.answer_cursor;
                lines.push(Line::from(vec![
                    Span::styled(
                        if at_cursor { "  ▶ " } else { "    " },
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(format!("{}. ", index + 1), Style::default().fg(Color::DarkGray)),
                    Span::raw(content.to_string()),
                ]));
            }
        } else if let Some(answer) = question.answer_text() {
            lines.push(Line::from(""));
            lines.push(field_line("  Answer", answer.to_string()));
        }

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }
}

impl Component for ExamEditorScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.input.is_some() {
            return Ok(self.handle_input_key(key));
        }
        if self.editor.is_none() {
            return Ok(None);
        }

        let action = match key.code {
            KeyCode::Tab => {
                self.move_focus(true);
                None
            }
            KeyCode::BackTab => {
                self.move_focus(false);
                None
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char('n') => {
                let action = self.edit_with(|editor, _| {
                    editor.add_question();
                    Ok(())
                });
                self.option_cursor = 0;
                self.answer_cursor = 0;
                action
            }
            KeyCode::Char('D') => self.edit_with(|editor, _| editor.delete_question()),
            KeyCode::Char('[') => {
                self.edit_with(|editor, _| {
                    editor.previous_question();
                    Ok(())
                })
            }
            KeyCode::Char(']') => {
                self.edit_with(|editor, _| {
                    editor.next_question();
                    Ok(())
                })
            }
            _ => self.handle_focus_key(key),
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let Some(ref editor) = self.editor else {
            let text = if self.loading { "loading…" } else { "Exam not found" };
            frame.render_widget(
                Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" Exam ")),
                area,
            );
            return Ok(());
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(area);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(columns[0]);

        self.draw_info(frame, left[0], editor);
        self.draw_question_list(frame, left[1], editor);
        self.draw_question(frame, columns[1], editor);
        Ok(())
    }
}

impl Screen for ExamEditorScreen {
    fn load(&mut self) -> Vec<Request> {
        match self.exam_id {
            Some(ref exam_id) => {
                self.loading = true;
                vec![Request::Exam(exam_id.clone())]
            }
            None => Vec::new(),
        }
    }

    fn apply(&mut self, reply: Reply) -> Option<Action> {
        if let Reply::Exam(result) = reply {
            self.loading = false;
            match result {
                Ok(exam) => {
                    self.editor = Some(ExamEditor::from_exam(&exam));
                    self.input = None;
                    self.clamp_cursors();
                }
                Err(e) => warn!(exam_id = ?self.exam_id, error = %e, "exam fetch failed"),
            }
        }
        None
    }

    fn is_editing(&self) -> bool {
        self.input.is_some()
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.input.is_some() {
            return vec![("Enter", "Apply"), ("Esc", "Cancel")];
        }
        let mut hints = vec![("Tab", "Focus"), ("Enter", "Edit")];
        match self.focus {
            Focus::Level | Focus::Kind => hints.push(("←/→", "Change")),
            Focus::Options => {
                hints.extend([("a", "Add"), ("x", "Remove")]);
                if !self.is_arrange() {
                    hints.push(("Space", "Correct"));
                }
            }
            Focus::Answer => hints.push(("K/J", "Move")),
            _ => {}
        }
        hints.extend([
            ("n", "New question"),
            ("[/]", "Prev/next"),
            ("D", "Delete question"),
            ("Ctrl+s", "Save"),
            ("Esc", "Back"),
        ]);
        hints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::exam::{AnswerValue, ExamDetail, Level, Question, QuestionOption};

    fn press(screen: &mut ExamEditorScreen, code: KeyCode) -> Option<Action> {
        screen
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    fn type_text(screen: &mut ExamEditorScreen, text: &str) {
        for c in text.chars() {
            press(screen, KeyCode::Char(c));
        }
    }

    fn focus(screen: &mut ExamEditorScreen, target: Focus) {
        while screen.focus != target {
            press(screen, KeyCode::Tab);
        }
    }

    fn save(screen: &mut ExamEditorScreen) -> Option<Action> {
        screen
            .handle_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
            .unwrap()
    }

    fn editor(screen: &ExamEditorScreen) -> &ExamEditor {
        screen.editor.as_ref().unwrap()
    }

    #[test]
    fn test_build_and_submit_new_exam() {
        let mut screen = ExamEditorScreen::create("ch1".to_string());
        assert!(screen.load().is_empty());

        press(&mut screen, KeyCode::Enter);
        assert!(screen.is_editing());
        type_text(&mut screen, "Quiz");
        press(&mut screen, KeyCode::Enter);
        assert!(!screen.is_editing());

        focus(&mut screen, Focus::Level);
        press(&mut screen, KeyCode::Right);
        assert_eq!(editor(&screen).info.level, Level::Medium);

        focus(&mut screen, Focus::Time);
        press(&mut screen, KeyCode::Enter);
        press(&mut screen, KeyCode::Backspace);
        press(&mut screen, KeyCode::Backspace);
        type_text(&mut screen, "4x5");
        press(&mut screen, KeyCode::Enter);
        assert_eq!(editor(&screen).info.time_exam, 45);

        press(&mut screen, KeyCode::Char('n'));
        focus(&mut screen, Focus::Question);
        press(&mut screen, KeyCode::Enter);
        type_text(&mut screen, "2 + 2?");
        press(&mut screen, KeyCode::Enter);

        focus(&mut screen, Focus::Options);
        press(&mut screen, KeyCode::Char('a'));
        type_text(&mut screen, "3");
        press(&mut screen, KeyCode::Enter);
        press(&mut screen, KeyCode::Char('a'));
        type_text(&mut screen, "4");
        press(&mut screen, KeyCode::Enter);
        press(&mut screen, KeyCode::Char(' '));

        let Some(Action::Submit(Mutation::CreateExam(request))) = save(&mut screen) else {
            panic!("expected create");
        };
        assert_eq!(request.name, "Quiz");
        assert_eq!(request.time_exam, 45);
        assert_eq!(request.chapter_id.as_deref(), Some("ch1"));
        assert_eq!(request.questions.len(), 1);
        assert_eq!(request.questions[0].content, "2 + 2?");
        assert_eq!(
            request.questions[0].correct_answer,
            AnswerValue::Text("4".to_string())
        );
    }

    #[test]
    fn test_validation_error_becomes_notice() {
        let mut screen = ExamEditorScreen::create("ch1".to_string());
        press(&mut screen, KeyCode::Enter);
        type_text(&mut screen, "Quiz");
        press(&mut screen, KeyCode::Enter);

        assert_eq!(
            save(&mut screen),
            Some(Action::Notify(Notice::error(
                "Please add at least one question before submitting"
            )))
        );
    }

    #[test]
    fn test_duplicate_answer_is_reported() {
        let mut screen = ExamEditorScreen::create("ch1".to_string());
        press(&mut screen, KeyCode::Char('n'));
        focus(&mut screen, Focus::Options);
        press(&mut screen, KeyCode::Char('a'));
        type_text(&mut screen, "yes");
        press(&mut screen, KeyCode::Enter);
        press(&mut screen, KeyCode::Char(' '));

        assert_eq!(
            press(&mut screen, KeyCode::Char(' ')),
            Some(Action::Notify(Notice::error("Duplicate answer")))
        );
    }

    #[test]
    fn test_arrange_reorder_and_answer_focus() {
        let mut screen = ExamEditorScreen::create("ch1".to_string());
        press(&mut screen, KeyCode::Char('n'));
        focus(&mut screen, Focus::Options);
        for word in ["I", "am", "here"] {
            press(&mut screen, KeyCode::Char('a'));
            type_text(&mut screen, word);
            press(&mut screen, KeyCode::Enter);
        }

        // Answer focus is skipped for MCQ
        press(&mut screen, KeyCode::Tab);
        assert_eq!(screen.focus, Focus::Name);

        focus(&mut screen, Focus::Kind);
        press(&mut screen, KeyCode::Char(' '));
        assert!(screen.is_arrange());

        focus(&mut screen, Focus::Answer);
        press(&mut screen, KeyCode::Char('J'));
        assert_eq!(screen.answer_cursor, 1);
        assert_eq!(
            editor(&screen).current().unwrap().arranged_contents(),
            vec!["am", "I", "here"]
        );
        press(&mut screen, KeyCode::Char('K'));
        assert_eq!(screen.answer_cursor, 0);
        assert_eq!(
            editor(&screen).current().unwrap().arranged_contents(),
            vec!["I", "am", "here"]
        );
        assert!(!editor(&screen).current().unwrap().initial_order);
    }

    #[test]
    fn test_existing_exam_loads_then_updates() {
        let mut screen = ExamEditorScreen::edit("e1".to_string());
        assert_eq!(screen.load(), vec![Request::Exam("e1".to_string())]);
        assert_eq!(press(&mut screen, KeyCode::Char('n')), None);

        screen.apply(Reply::Exam(Ok(ExamDetail {
            id: "e1".to_string(),
            chapter_id: "ch1".to_string(),
            name: "Quiz".to_string(),
            time_exam: 10,
            questions: vec![Question {
                content: "Pick".to_string(),
                order: 1,
                kind: QuestionType::Mcq,
                options: vec![QuestionOption {
                    id: "o1".to_string(),
                    content: "A".to_string(),
                }],
                correct_answer: AnswerValue::Text("A".to_string()),
            }],
            ..ExamDetail::default()
        })));

        let Some(Action::Submit(Mutation::UpdateExam { exam_id, request })) = save(&mut screen)
        else {
            panic!("expected update");
        };
        assert_eq!(exam_id, "e1");
        assert_eq!(request.chapter_id, None);
        assert_eq!(request.questions[0].options[0].content, "A");
    }

    #[test]
    fn test_add_option_without_question_keeps_input_closed() {
        let mut screen = ExamEditorScreen::create("ch1".to_string());
        focus(&mut screen, Focus::Options);
        assert_eq!(
            press(&mut screen, KeyCode::Char('a')),
            Some(Action::Notify(Notice::error(
                EditorError::NoQuestion.to_string()
            )))
        );
        assert!(!screen.is_editing());
    }

    #[test]
    fn test_escape_cancels_input() {
        let mut screen = ExamEditorScreen::create("ch1".to_string());
        press(&mut screen, KeyCode::Enter);
        type_text(&mut screen, "abc");
        press(&mut screen, KeyCode::Esc);
        assert!(!screen.is_editing());
        assert!(editor(&screen).info.name.is_empty());
    }
}
