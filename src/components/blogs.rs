//! Blog manager: moderation list

use super::resource_list::{ResourceList, TableRow};
use crate::action::Action;
use crate::component::{Component, Screen};
use crate::model::blog::{Blog, BlogStatus};
use crate::model::envelope::ListQuery;
use crate::model::mutation::PendingMutation;
use crate::model::route::Route;
use crate::services::dispatch::{Reply, Request};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Constraint, layout::Rect, Frame};

impl TableRow for Blog {
    const HEADERS: &'static [&'static str] = &["Title", "Description", "Status", "Likes", "Created"];

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Length(17),
            Constraint::Length(6),
            Constraint::Length(11),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.description.clone(),
            self.status_blog.as_str().to_string(),
            self.likes.len().to_string(),
            self.created_at
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ]
    }
}

/// Confirmation for a moderation action on `blog`
pub fn moderate(blog: &Blog, status: BlogStatus) -> Action {
    Action::AskConfirm(PendingMutation::SetBlogStatus {
        blog_id: blog.id.clone(),
        title: blog.title.clone(),
        status,
    })
}

pub fn ask_delete(blog: &Blog) -> Action {
    Action::AskConfirm(PendingMutation::DeleteBlog {
        blog_id: blog.id.clone(),
        title: blog.title.clone(),
    })
}

pub struct BlogsScreen {
    list: ResourceList<Blog>,
}

impl BlogsScreen {
    pub fn new(page_size: u32) -> Self {
        Self {
            list: ResourceList::new("Blogs", page_size),
        }
    }

    fn fetch(query: ListQuery) -> Action {
        Action::Send(Request::Blogs(query))
    }
}

impl Component for BlogsScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(action) = self.list.handle_key_event(key) {
            return Ok(Some(action));
        }
        let Some(blog) = self.list.selected() else {
            return Ok(None);
        };
        let action = match key.code {
            KeyCode::Enter => Some(Action::Navigate(Route::BlogDetail {
                blog_id: blog.id.clone(),
            })),
            KeyCode::Char('a') => Some(moderate(blog, BlogStatus::Approved)),
            KeyCode::Char('r') => Some(moderate(blog, BlogStatus::Rejected)),
            KeyCode::Char('d') => Some(ask_delete(blog)),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        Ok(self.list.update(&action).map(Self::fetch))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.list.draw(frame, area, true);
        Ok(())
    }
}

impl Screen for BlogsScreen {
    fn load(&mut self) -> Vec<Request> {
        vec![Request::Blogs(self.list.begin_fetch())]
    }

    fn apply(&mut self, reply: Reply) -> Option<Action> {
        if let Reply::Blogs(result) = reply {
            self.list.apply(result);
        }
        None
    }

    fn is_editing(&self) -> bool {
        self.list.is_searching()
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.list.is_searching() {
            return vec![("Enter", "Search"), ("Esc", "Cancel")];
        }
        vec![
            ("j/k", "Move"),
            ("[/]", "Page"),
            ("/", "Search"),
            ("Enter", "Open"),
            ("a", "Approve"),
            ("r", "Reject"),
            ("d", "Delete"),
            ("?", "Help"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::envelope::Page;
    use crossterm::event::KeyModifiers;

    fn press(screen: &mut BlogsScreen, code: KeyCode) -> Option<Action> {
        screen
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    fn loaded() -> BlogsScreen {
        let mut screen = BlogsScreen::new(10);
        screen.load();
        screen.apply(Reply::Blogs(Ok(Page {
            data: vec![
                Blog {
                    id: "b1".to_string(),
                    title: "First".to_string(),
                    ..Blog::default()
                },
                Blog {
                    id: "b2".to_string(),
                    title: "Second".to_string(),
                    ..Blog::default()
                },
            ],
            total: 2,
        })));
        screen
    }

    #[test]
    fn test_row_actions_target_selected_blog() {
        let mut screen = loaded();
        let action = press(&mut screen, KeyCode::Char('j'));
        screen.update(action.unwrap()).unwrap();

        assert_eq!(
            press(&mut screen, KeyCode::Char('r')),
            Some(Action::AskConfirm(PendingMutation::SetBlogStatus {
                blog_id: "b2".to_string(),
                title: "Second".to_string(),
                status: BlogStatus::Rejected,
            }))
        );
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            Some(Action::Navigate(Route::BlogDetail {
                blog_id: "b2".to_string()
            }))
        );
        assert_eq!(
            press(&mut screen, KeyCode::Char('d')),
            Some(Action::AskConfirm(PendingMutation::DeleteBlog {
                blog_id: "b2".to_string(),
                title: "Second".to_string(),
            }))
        );
    }

    #[test]
    fn test_paging_past_total_does_not_fetch() {
        let mut screen = loaded();
        assert_eq!(screen.update(Action::NextPage).unwrap(), None);
    }
}
