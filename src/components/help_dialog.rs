//! Help dialog component
//!
//! Lists the shortcuts of every screen; scrolls with j/k.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let dialog_area = centered_popup(area, 64, area.height.saturating_sub(4));
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        // Render scrollbar if content exceeds visible area
        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Helper to add a section header
    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    // Helper to add a shortcut line
    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Global");
    add_shortcut(&mut lines, "1-4", "Statistics / Accounts / Blogs / Courses");
    add_shortcut(&mut lines, "Esc", "Back to the previous screen");
    add_shortcut(&mut lines, "R", "Reload the current screen");
    add_shortcut(&mut lines, "L", "Log out");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit");

    add_section(&mut lines, "Lists");
    add_shortcut(&mut lines, "j / ↓", "Next row");
    add_shortcut(&mut lines, "k / ↑", "Previous row");
    add_shortcut(&mut lines, "g / G", "First / last row");
    add_shortcut(&mut lines, "] / →", "Next page");
    add_shortcut(&mut lines, "[ / ←", "Previous page");
    add_shortcut(&mut lines, "/", "Search by name, Enter to apply");
    add_shortcut(&mut lines, "Enter", "Open the selected record");

    add_section(&mut lines, "Accounts");
    add_shortcut(&mut lines, "t", "Toggle FREE / PREMIUM");
    add_shortcut(&mut lines, "f", "Only pending premium requests");

    add_section(&mut lines, "Blogs");
    add_shortcut(&mut lines, "a", "Approve");
    add_shortcut(&mut lines, "r", "Reject");
    add_shortcut(&mut lines, "d", "Delete");

    add_section(&mut lines, "Courses");
    add_shortcut(&mut lines, "n", "New course / chapter / exam");
    add_shortcut(&mut lines, "Tab", "Next tab (Info/Chapters/Exams)");
    add_shortcut(&mut lines, "e", "Edit course info or chapter");
    add_shortcut(&mut lines, "d", "Delete chapter or exam");
    add_shortcut(&mut lines, "Ctrl+s", "Save form");

    add_section(&mut lines, "Exam editor");
    add_shortcut(&mut lines, "Tab", "Move focus between fields");
    add_shortcut(&mut lines, "Enter", "Edit focused text, Enter to apply");
    add_shortcut(&mut lines, "← / →", "Change level or question type");
    add_shortcut(&mut lines, "n / D", "Add / delete question");
    add_shortcut(&mut lines, "[ / ]", "Previous / next question");
    add_shortcut(&mut lines, "a / x", "Add / remove option");
    add_shortcut(&mut lines, "Space", "Mark correct option");
    add_shortcut(&mut lines, "K / J", "Move arranged answer up / down");
    add_shortcut(&mut lines, "Ctrl+s", "Submit exam");

    add_section(&mut lines, "Statistics");
    add_shortcut(&mut lines, "p", "Cycle payment period (day/month/year)");

    // Footer
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_scroll_and_close() {
        let mut dialog = HelpDialog::default();
        let key = |c| KeyEvent::new(c, KeyModifiers::NONE);
        dialog.handle_key_event(key(KeyCode::PageDown)).unwrap();
        dialog.handle_key_event(key(KeyCode::Char('k'))).unwrap();
        assert_eq!(dialog.scroll_offset, 9);
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Char('?'))).unwrap(),
            Some(Action::CloseModal)
        );
    }

    #[test]
    fn test_help_lists_every_section() {
        let text: String = build_help_content()
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        for section in ["Global", "Lists", "Accounts", "Blogs", "Courses", "Exam editor", "Statistics"] {
            assert!(text.contains(section), "{}", section);
        }
    }
}
