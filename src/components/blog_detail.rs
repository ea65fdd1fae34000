//! Blog detail: author, status, likes and the post body as plain text

use super::blogs::{ask_delete, moderate};
use super::layout::split_header;
use super::shell::field_line;
use crate::action::Action;
use crate::component::{Component, Screen};
use crate::model::blog::{Blog, BlogStatus};
use crate::services::dispatch::{Reply, Request};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// Regex to match HTML tags
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<[^>]*>").expect("Invalid regex")
});

/// Block-level tags that end a line
static BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<\s*(br\s*/?|/p|/div|/h[1-6]|/li)\s*>").expect("Invalid regex")
});

/// Convert rich-text blog content to plain lines
pub fn strip_html(html: &str) -> String {
    let with_breaks = BREAK_REGEX.replace_all(html, "\n");
    let text = TAG_REGEX.replace_all(&with_breaks, "");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    let mut lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    lines.dedup_by(|a, b| a.is_empty() && b.is_empty());
    lines.join("\n").trim().to_string()
}

pub struct BlogDetailScreen {
    blog_id: String,
    blog: Option<Blog>,
    loading: bool,
    scroll: u16,
}

impl BlogDetailScreen {
    pub fn new(blog_id: String) -> Self {
        Self {
            blog_id,
            blog: None,
            loading: false,
            scroll: 0,
        }
    }

    fn status_color(status: BlogStatus) -> Color {
        match status {
            BlogStatus::PendingApproved => Color::Yellow,
            BlogStatus::Approved => Color::Green,
            BlogStatus::Rejected => Color::Red,
        }
    }
}

impl Component for BlogDetailScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
                None
            }
            KeyCode::Char('a') => self.blog.as_ref().map(|b| moderate(b, BlogStatus::Approved)),
            KeyCode::Char('r') => self.blog.as_ref().map(|b| moderate(b, BlogStatus::Rejected)),
            KeyCode::Char('d') => self.blog.as_ref().map(ask_delete),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let Some(ref blog) = self.blog else {
            let text = if self.loading { "loading…" } else { "Blog not found" };
            let paragraph = Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Blog ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            frame.render_widget(paragraph, area);
            return Ok(());
        };

        let (header, body) = split_header(area, 8);

        let mut status = field_line("Status", blog.status_blog.as_str());
        status.spans[1].style = Style::default().fg(Self::status_color(blog.status_blog));
        let lines = vec![
            field_line("Author", blog.author.display()),
            status,
            field_line("Likes", blog.likes.len().to_string()),
            field_line(
                "Created",
                blog.created_at
                    .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default(),
            ),
            field_line("Description", blog.description.clone()),
            field_line("Thumbnail", blog.thumbnail.clone()),
        ];
        let info = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", blog.title))
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(info, header);

        let content: Vec<Line> = strip_html(&blog.content)
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        let content = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Content ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(content, body);
        Ok(())
    }
}

impl Screen for BlogDetailScreen {
    fn load(&mut self) -> Vec<Request> {
        self.loading = true;
        vec![Request::Blog(self.blog_id.clone())]
    }

    fn apply(&mut self, reply: Reply) -> Option<Action> {
        if let Reply::Blog(result) = reply {
            self.loading = false;
            match result {
                Ok(blog) => self.blog = Some(blog),
                Err(e) => warn!(blog_id = %self.blog_id, error = %e, "blog fetch failed"),
            }
        }
        None
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("j/k", "Scroll"),
            ("a", "Approve"),
            ("r", "Reject"),
            ("d", "Delete"),
            ("Esc", "Back"),
            ("?", "Help"),
        ]
    }
}
