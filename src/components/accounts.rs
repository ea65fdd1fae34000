//! Account manager: paginated users with the premium request filter

use super::resource_list::{ResourceList, TableRow};
use crate::action::Action;
use crate::component::{Component, Screen};
use crate::model::envelope::ListQuery;
use crate::model::mutation::PendingMutation;
use crate::model::user::User;
use crate::services::dispatch::{Reply, Request};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Constraint, layout::Rect, Frame};

/// Query flag listing only users who asked for premium
pub const PREMIUM_REQUEST_FILTER: &str = "isRequestChangeToPremium";

impl TableRow for User {
    const HEADERS: &'static [&'static str] =
        &["Email", "Name", "Account", "Premium until", "Requested", "Score"];

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Percentage(28),
            Constraint::Percentage(22),
            Constraint::Length(9),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Length(6),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.email.clone(),
            self.name.clone(),
            self.account_type.as_str().to_string(),
            self.premium_expiry_label(),
            if self.is_request_change_to_premium { "yes" } else { "" }.to_string(),
            self.score.to_string(),
        ]
    }
}

pub struct AccountsScreen {
    list: ResourceList<User>,
}

impl AccountsScreen {
    pub fn new(page_size: u32) -> Self {
        Self {
            list: ResourceList::new("Accounts", page_size),
        }
    }

    fn fetch(query: ListQuery) -> Action {
        Action::Send(Request::Users(query))
    }

    fn toggle_request_filter(&mut self) -> Action {
        let query = &mut self.list.listing.query;
        let value = if query.filter(PREMIUM_REQUEST_FILTER).is_some() {
            ""
        } else {
            "true"
        };
        query.set_filter(PREMIUM_REQUEST_FILTER, value);
        self.list.listing.reset_to_first_page();
        Self::fetch(self.list.begin_fetch())
    }

    fn ask_toggle_account_type(&self) -> Option<Action> {
        let user = self.list.selected()?;
        Some(Action::AskConfirm(PendingMutation::SetAccountType {
            user_id: user.id.clone(),
            email: user.email.clone(),
            account_type: user.account_type.toggled(),
        }))
    }
}

impl Component for AccountsScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(action) = self.list.handle_key_event(key) {
            return Ok(Some(action));
        }
        let action = match key.code {
            KeyCode::Char('f') => Some(self.toggle_request_filter()),
            KeyCode::Char('t') | KeyCode::Enter => self.ask_toggle_account_type(),
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

impl Screen for AccountsScreen {
    fn load(&mut self) -> Vec<Request> {
        vec![Request::Users(self.list.begin_fetch())]
    }

    fn apply(&mut self, reply: Reply) -> Option<Action> {
        if let Reply::Users(result) = reply {
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
            ("f", "Premium requests"),
            ("t", "Toggle account type"),
            ("?", "Help"),
        ]
    }
}
