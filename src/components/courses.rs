//! Course manager list

use super::resource_list::{ResourceList, TableRow};
use crate::action::Action;
use crate::component::{Component, Screen};
use crate::model::course::Course;
use crate::model::envelope::ListQuery;
use crate::model::route::Route;
use crate::services::dispatch::{Reply, Request};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Constraint, layout::Rect, Frame};

impl TableRow for Course {
    const HEADERS: &'static [&'static str] = &["Name", "Description", "Chapters", "Created"];

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Percentage(30),
            Constraint::Percentage(50),
            Constraint::Length(9),
            Constraint::Length(11),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.description.clone(),
            self.chapters.len().to_string(),
            self.created_at
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ]
    }
}

pub struct CoursesScreen {
    list: ResourceList<Course>,
}

impl CoursesScreen {
    pub fn new(page_size: u32) -> Self {
        Self {
            list: ResourceList::new("Courses", page_size),
        }
    }

    fn fetch(query: ListQuery) -> Action {
        Action::Send(Request::Courses(query))
    }
}

impl Component for CoursesScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(action) = self.list.handle_key_event(key) {
            return Ok(Some(action));
        }
        let action = match key.code {
            KeyCode::Char('n') => Some(Action::Navigate(Route::NewCourse)),
            KeyCode::Enter => self.list.selected().map(|course| {
                Action::Navigate(Route::CourseDetail {
                    course_id: course.id.clone(),
                })
            }),
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

impl Screen for CoursesScreen {
    fn load(&mut self) -> Vec<Request> {
        vec![Request::Courses(self.list.begin_fetch())]
    }

    fn apply(&mut self, reply: Reply) -> Option<Action> {
        if let Reply::Courses(result) = reply {
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
            ("n", "New course"),
            ("?", "Help"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::envelope::Page;
    use crossterm::event::KeyModifiers;

    fn press(screen: &mut CoursesScreen, code: KeyCode) -> Option<Action> {
        screen
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn test_open_and_new() {
        let mut screen = CoursesScreen::new(10);
        assert_eq!(press(&mut screen, KeyCode::Enter), None);
        assert_eq!(
            press(&mut screen, KeyCode::Char('n')),
            Some(Action::Navigate(Route::NewCourse))
        );

        screen.apply(Reply::Courses(Ok(Page {
            data: vec![Course {
                id: "c1".to_string(),
                ..Course::default()
            }],
            total: 1,
        })));
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            Some(Action::Navigate(Route::CourseDetail {
                course_id: "c1".to_string()
            }))
        );
    }

    #[test]
    fn test_load_marks_loading_and_uses_page_size() {
        let mut screen = CoursesScreen::new(25);
        let requests = screen.load();
        assert_eq!(requests, vec![Request::Courses(ListQuery::new(25))]);
        assert!(screen.list.listing.loading);
    }
}
