//! Yes/No confirmation dialog
//!
//! Used for quitting and for every status change or delete. The dialog only
//! answers; the app decides what a confirmation means for the modal on top.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::mutation::PendingMutation;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Default)]
pub struct ConfirmDialog;

impl ConfirmDialog {
    pub fn draw_quit(&self, frame: &mut Frame, area: Rect) {
        self.render(frame, area, " Quit? ", "Are you sure you want to quit?", None);
    }

    pub fn draw_with_pending(&self, frame: &mut Frame, area: Rect, pending: &PendingMutation) {
        self.render(
            frame,
            area,
            " Confirm ",
            &pending.title(),
            Some(pending.subject()),
        );
    }

    fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        question: &str,
        subject: Option<String>,
    ) {
        let height = if subject.is_some() { 9 } else { 7 };
        let popup_area = centered_popup(area, 60, height);
        frame.render_widget(Clear, popup_area);

        let mut content = vec![
            Line::from(""),
            Line::from(Span::styled(
                question.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(subject) = subject {
            content.push(Line::from(""));
            content.push(Line::from(Span::styled(
                subject,
                Style::default().fg(Color::Cyan),
            )));
        }
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled(
                " y ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Yes  "),
            Span::styled(
                " n/Esc ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("No, cancel"),
        ]));

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(title.to_string())
                    .title_style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, popup_area);
    }
}

impl Component for ConfirmDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ConfirmModal),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.draw_quit(frame, area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_dialog_answers() {
        let mut dialog = ConfirmDialog;
        let key = |c| KeyEvent::new(c, KeyModifiers::NONE);
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Char('Y'))).unwrap(),
            Some(Action::ConfirmModal)
        );
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::CloseModal)
        );
        assert_eq!(dialog.handle_key_event(key(KeyCode::Enter)).unwrap(), None);
    }
}
