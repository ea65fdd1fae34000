//! Paginated, searchable table used by every list screen

use crate::action::Action;
use crate::model::envelope::{ListQuery, Page};
use crate::model::listing::Listing;
use crate::services::http::ApiResult;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};
use tracing::warn;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Longest cell text before it is cut with an ellipsis
const MAX_CELL_WIDTH: usize = 48;

/// A record that renders as one table row
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn widths() -> Vec<Constraint>;

    fn cells(&self) -> Vec<String>;
}

/// Cut `text` to at most `max` display columns, ending with `…` when cut
pub fn truncate(text: &str, max: usize) -> String {
    let text = text.trim().replace('\n', " ");
    if text.width() <= max {
        return text;
    }
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Render `rows` as a bordered table with a highlighted selection
pub fn draw_rows<T: TableRow>(
    frame: &mut Frame,
    area: Rect,
    rows: &[T],
    state: &mut TableState,
    title: String,
    footer: Option<Line<'static>>,
    focused: bool,
) {
    let header = Row::new(T::HEADERS.iter().map(|h| {
        Cell::from(*h).style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    }))
    .bottom_margin(0);

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new(
                row.cells()
                    .into_iter()
                    .map(|cell| Cell::from(truncate(&cell, MAX_CELL_WIDTH))),
            )
        })
        .collect();

    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));
    if let Some(footer) = footer {
        block = block.title_bottom(footer);
    }

    let table = Table::new(body, T::widths())
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(table, area, state);
}

/// List screen state: the listing plus table selection
pub struct ResourceList<T> {
    pub listing: Listing<T>,
    title: &'static str,
    state: TableState,
}

impl<T: TableRow> ResourceList<T> {
    pub fn new(title: &'static str, limit: u32) -> Self {
        Self {
            listing: Listing::new(limit),
            title,
            state: TableState::default(),
        }
    }

    pub fn selected(&self) -> Option<&T> {
        self.listing.selected_row()
    }

    pub fn is_searching(&self) -> bool {
        self.listing.search_mode
    }

    /// Mark a fetch as started and return the query to send
    pub fn begin_fetch(&mut self) -> ListQuery {
        self.listing.loading = true;
        self.listing.query.clone()
    }

    pub fn apply(&mut self, result: ApiResult<Page<T>>) {
        match result {
            Ok(page) => self.listing.apply_page(page),
            Err(e) => {
                warn!(list = self.title, error = %e, "list fetch failed");
                self.listing.fetch_failed();
            }
        }
    }

    /// Keys every list understands
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Action> {
        if self.listing.search_mode {
            return match key.code {
                KeyCode::Esc => Some(Action::ExitSearchMode),
                KeyCode::Enter => Some(Action::SubmitSearch),
                KeyCode::Backspace => Some(Action::SearchBackspace),
                KeyCode::Char(c) => Some(Action::SearchInput(c)),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),
            KeyCode::Char(']') | KeyCode::Right | KeyCode::PageDown => Some(Action::NextPage),
            KeyCode::Char('[') | KeyCode::Left | KeyCode::PageUp => Some(Action::PrevPage),
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            _ => None,
        }
    }

    /// Apply a list action; returns the query to fetch when one is needed
    pub fn update(&mut self, action: &Action) -> Option<ListQuery> {
        match action {
            Action::NextItem => self.listing.next(),
            Action::PrevItem => self.listing.previous(),
            Action::FirstItem => self.listing.select_first(),
            Action::LastItem => self.listing.select_last(),
            Action::NextPage => {
                if self.listing.next_page() {
                    return Some(self.begin_fetch());
                }
            }
            Action::PrevPage => {
                if self.listing.previous_page() {
                    return Some(self.begin_fetch());
                }
            }
            Action::EnterSearchMode => self.listing.enter_search_mode(),
            Action::ExitSearchMode => self.listing.exit_search_mode(),
            Action::SearchInput(c) => self.listing.search_input(*c),
            Action::SearchBackspace => self.listing.search_backspace(),
            Action::SubmitSearch => {
                self.listing.submit_search();
                return Some(self.begin_fetch());
            }
            _ => {}
        }
        None
    }

    fn footer(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!(
                " Page {}/{} ",
                self.listing.query.page,
                self.listing.page_count()
            ),
            Style::default().fg(Color::Yellow),
        )];
        if self.listing.search_mode {
            spans.push(Span::styled(
                format!(" Search: {}_ ", self.listing.search_draft),
                Style::default().fg(Color::Cyan),
            ));
        } else if !self.listing.query.name.is_empty() {
            spans.push(Span::styled(
                format!(" name: {} ", self.listing.query.name),
                Style::default().fg(Color::DarkGray),
            ));
        }
        for (key, value) in &self.listing.query.filters {
            spans.push(Span::styled(
                format!(" {}: {} ", key, value),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if self.listing.loading {
            spans.push(Span::styled(" loading… ", Style::default().fg(Color::Yellow)));
        }
        Line::from(spans)
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        if self.listing.rows.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(self.listing.selected));
        }
        let title = format!(" {} ({}) ", self.title, self.listing.total);
        let footer = self.footer();
        draw_rows(
            frame,
            area,
            &self.listing.rows,
            &mut self.state,
            title,
            Some(footer),
            focused,
        );
    }
}
