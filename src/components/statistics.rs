//! Statistics dashboard: platform totals and a revenue bar chart

use super::layout::split_header;
use super::shell::field_line;
use crate::action::Action;
use crate::component::{Component, Screen};
use crate::model::blog::BlogStatus;
use crate::model::exam::Level;
use crate::model::payment::{PaymentStatistic, StatPeriod};
use crate::model::stats::Dashboard;
use crate::services::dispatch::{Reply, Request};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{BarChart, Block, Borders, Paragraph},
    Frame,
};
use tracing::warn;

#[derive(Default)]
pub struct StatisticsScreen {
    dashboard: Option<Dashboard>,
    payment: Option<PaymentStatistic>,
    period: StatPeriod,
    loading_dashboard: bool,
    loading_payment: bool,
}

impl StatisticsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn card(title: &'static str, lines: Vec<Line<'static>>) -> Paragraph<'static> {
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
    }

    fn draw_cards(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        let Some(ref dashboard) = self.dashboard else {
            let text = if self.loading_dashboard {
                "loading…"
            } else {
                "no data"
            };
            for (index, title) in [" Users ", " Exams ", " Blogs "].into_iter().enumerate() {
                frame.render_widget(Self::card(title, vec![Line::from(text)]), chunks[index]);
            }
            return;
        };

        let users = &dashboard.users;
        frame.render_widget(
            Self::card(
                " Users ",
                vec![
                    field_line("Total", users.total.to_string()),
                    field_line("Free", users.free.to_string()),
                    field_line("Premium", users.premium.to_string()),
                    field_line("Requests", users.pending_requests.to_string()),
                ],
            ),
            chunks[0],
        );

        let courses = &dashboard.courses;
        let mut exam_lines = vec![
            field_line("Courses", courses.courses.to_string()),
            field_line("Chapters", courses.chapters.to_string()),
            field_line("Exams", courses.exams.to_string()),
        ];
        exam_lines.extend(
            Level::all()
                .into_iter()
                .map(|level| field_line(level.as_str(), courses.exams_at(level).to_string())),
        );
        frame.render_widget(Self::card(" Exams ", exam_lines), chunks[1]);

        let blogs = &dashboard.blogs;
        frame.render_widget(
            Self::card(
                " Blogs ",
                vec![
                    field_line("Total", blogs.total.to_string()),
                    field_line("Likes", blogs.likes.to_string()),
                    field_line(
                        "Pending",
                        blogs.with_status(BlogStatus::PendingApproved).to_string(),
                    ),
                    field_line("Approved", blogs.with_status(BlogStatus::Approved).to_string()),
                    field_line("Rejected", blogs.with_status(BlogStatus::Rejected).to_string()),
                ],
            ),
            chunks[2],
        );
    }

    fn draw_revenue(&self, frame: &mut Frame, area: Rect) {
        let total = self.payment.as_ref().map_or(0.0, |p| p.total_amount);
        let mut title = format!(
            " Revenue by {} (total {:.0}) ",
            self.period.as_path(),
            total
        );
        if self.loading_payment {
            title.push_str("loading… ");
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray));

        let points = self
            .payment
            .as_ref()
            .map(PaymentStatistic::chart_points)
            .unwrap_or_default();
        if points.is_empty() {
            frame.render_widget(Paragraph::new("No payments in this period").block(block), area);
            return;
        }

        let data: Vec<(&str, u64)> = points.iter().map(|(l, v)| (l.as_str(), *v)).collect();
        let inner_width = area.width.saturating_sub(2);
        let bar_width = (inner_width / data.len() as u16).saturating_sub(1).clamp(3, 12);

        let chart = BarChart::default()
            .block(block)
            .data(data.as_slice())
            .bar_width(bar_width)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(chart, area);
    }
}

impl Component for StatisticsScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('p') => {
                self.period = self.period.next();
                self.loading_payment = true;
                Some(Action::Send(Request::Payment(self.period)))
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let (cards, chart) = split_header(area, 10);
        self.draw_cards(frame, cards);
        self.draw_revenue(frame, chart);
        Ok(())
    }
}

impl Screen for StatisticsScreen {
    fn load(&mut self) -> Vec<Request> {
        self.loading_dashboard = true;
        self.loading_payment = true;
        vec![Request::Dashboard, Request::Payment(self.period)]
    }

    fn apply(&mut self, reply: Reply) -> Option<Action> {
        match reply {
            Reply::Dashboard(result) => {
                self.loading_dashboard = false;
                match result {
                    Ok(dashboard) => self.dashboard = Some(dashboard),
                    Err(e) => warn!(error = %e, "dashboard fetch failed"),
                }
            }
            Reply::Payment(result) => {
                self.loading_payment = false;
                match result {
                    Ok(payment) => self.payment = Some(payment),
                    Err(e) => warn!(error = %e, "payment statistic fetch failed"),
                }
            }
            _ => {}
        }
        None
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("p", "Period"),
            ("1-4", "Sections"),
            ("R", "Refresh"),
            ("L", "Logout"),
            ("?", "Help"),
            ("q", "Quit"),
        ]
    }
}
