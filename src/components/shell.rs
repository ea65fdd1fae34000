//! Frame around every screen: section sidebar, status line and help bar

use crate::model::notice::{Notice, NoticeLevel};
use crate::model::route::Section;
use crate::model::user::User;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Context needed for rendering the shell
pub struct ShellContext<'a> {
    pub active: Option<Section>,
    pub user: Option<&'a User>,
    pub path: &'a str,
    pub notice: Option<&'a Notice>,
    pub busy: bool,
}

pub fn draw_sidebar(frame: &mut Frame, area: Rect, ctx: &ShellContext) {
    let items: Vec<ListItem> = Section::all()
        .iter()
        .enumerate()
        .map(|(index, section)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(section.name()),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(
        ctx.active
            .and_then(|active| Section::all().iter().position(|s| *s == active)),
    );

    let title = match ctx.user {
        Some(user) if !user.name.is_empty() => format!(" {} ", user.name),
        Some(user) => format!(" {} ", user.email),
        None => " Admin ".to_string(),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut state);
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, ctx: &ShellContext) {
    let mut spans = vec![Span::styled(
        format!(" {} ", ctx.path),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if ctx.busy {
        spans.push(Span::styled(" loading… ", Style::default().fg(Color::Yellow)));
    }

    if let Some(notice) = ctx.notice {
        let color = match notice.level {
            NoticeLevel::Success => Color::Green,
            NoticeLevel::Error => Color::Red,
        };
        spans.push(Span::styled(
            format!(" {} ", notice.text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render `(key, label)` pairs the way every help bar shows them
pub fn hint_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(
                    format!(" {} ", key),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{} ", label)),
            ]
        })
        .collect()
}

pub fn draw_help_bar(frame: &mut Frame, area: Rect, hints: &[(&'static str, &'static str)]) {
    let paragraph = Paragraph::new(Line::from(hint_spans(hints)))
        .alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(paragraph, area);
}

/// A `label: value` line used by detail panels
pub fn field_line(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value.into(), Style::default().fg(Color::White)),
    ])
}

/// Error line in red, as forms show validation messages
pub fn error_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("Error: {}", message),
        Style::default().fg(Color::Red),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_spans_pair_keys_and_labels() {
        let spans = hint_spans(&[("q", "Quit"), ("?", "Help")]);
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].content, " q ");
        assert_eq!(spans[1].content, "Quit ");
        assert_eq!(spans[3].content, "Help ");
    }

    #[test]
    fn test_field_line_pads_label() {
        let line = field_line("Status", "APPROVED");
        assert_eq!(line.spans[0].content.len(), 14);
        assert_eq!(line.spans[1].content, "APPROVED");
    }
}
