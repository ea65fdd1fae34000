//! Text fields shared by the login screen, course forms and dialogs

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// What a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Rendered as `*`
    Secret,
    /// ASCII digits only
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
    pub kind: FieldKind,
}

impl Field {
    pub fn text(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            kind: FieldKind::Text,
        }
    }

    pub fn secret(label: &'static str) -> Self {
        Self {
            kind: FieldKind::Secret,
            ..Self::text(label)
        }
    }

    pub fn number(label: &'static str) -> Self {
        Self {
            kind: FieldKind::Number,
            ..Self::text(label)
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Apply an edit key; returns true when the key was consumed
    pub fn input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.clear();
                true
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => false,
            KeyCode::Char(c) => {
                if self.kind == FieldKind::Number && !c.is_ascii_digit() {
                    return true;
                }
                self.value.push(c);
                true
            }
            KeyCode::Backspace => {
                self.value.pop();
                true
            }
            _ => false,
        }
    }

    fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Secret => "*".repeat(self.value.chars().count()),
            FieldKind::Text | FieldKind::Number => self.value.clone(),
        }
    }

    /// `label  value` with a trailing cursor when focused
    pub fn line(&self, focused: bool) -> Line<'static> {
        let (marker, label_style, value) = if focused {
            (
                "> ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                format!("{}_", self.display_value()),
            )
        } else {
            ("  ", Style::default().fg(Color::DarkGray), self.display_value())
        };
        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(format!("{:<14}", self.label), label_style),
            Span::styled(
                value,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }
}

/// An ordered set of fields with one focused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub fields: Vec<Field>,
    pub focus: usize,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields, focus: 0 }
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or_default()
    }

    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn previous_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn is_last_field(&self) -> bool {
        self.focus + 1 >= self.fields.len()
    }

    /// Route a key to the focused field, handling Tab/arrow focus moves
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.next_field();
                true
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.previous_field();
                true
            }
            _ => match self.fields.get_mut(self.focus) {
                Some(field) => field.input(key),
                None => false,
            },
        }
    }

    /// One line per field; no cursor when the form is inactive
    pub fn lines(&self, active: bool) -> Vec<Line<'static>> {
        self.fields
            .iter()
            .enumerate()
            .map(|(index, field)| field.line(active && index == self.focus))
            .collect()
    }
}
