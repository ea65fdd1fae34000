//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::course::Chapter;
use crate::model::mutation::PendingMutation;
use crate::model::notice::Notice;
use crate::model::route::Route;
use crate::model::user::LoginResponse;
use crate::services::dispatch::{Mutation, Request};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for polling requests and expiring notices
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Routing & Session
    // ─────────────────────────────────────────────────────────────────────────
    /// Open a screen (subject to the session gate)
    Navigate(Route),
    /// Return to the previous screen
    Back,
    /// Login reply accepted; start the session
    LoggedIn(LoginResponse),
    /// Clear the session and return to login
    Logout,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next item in list
    NextItem,
    /// Move to previous item in list
    PrevItem,
    /// Jump to first item
    FirstItem,
    /// Jump to last item
    LastItem,
    /// Fetch the next page
    NextPage,
    /// Fetch the previous page
    PrevPage,
    /// Move to next tab
    NextTab,
    /// Move to previous tab
    PrevTab,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter search mode
    EnterSearchMode,
    /// Leave search mode and fetch page 1 with the filter
    SubmitSearch,
    /// Leave search mode without fetching
    ExitSearchMode,
    /// Add character to search query
    SearchInput(char),
    /// Remove last character from search query
    SearchBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Ask before running a status change or delete
    AskConfirm(PendingMutation),
    /// Open the chapter dialog; `None` creates a new chapter
    OpenChapterForm {
        course_id: String,
        chapter: Option<Chapter>,
    },
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Backend
    // ─────────────────────────────────────────────────────────────────────────
    /// Re-issue the current screen's fetches
    Refresh,
    /// Run a request in the background
    Send(Request),
    /// Submit a form
    Submit(Mutation),
    /// Show a notice in the status bar
    Notify(Notice),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::Navigate(route) => write!(f, "Navigate({})", route.path()),
            Action::Back => write!(f, "Back"),
            Action::LoggedIn(_) => write!(f, "LoggedIn"),
            Action::Logout => write!(f, "Logout"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::SubmitSearch => write!(f, "SubmitSearch"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::AskConfirm(pending) => write!(f, "AskConfirm({:?})", pending.kind()),
            Action::OpenChapterForm { chapter, .. } => {
                write!(f, "OpenChapterForm(new: {})", chapter.is_none())
            }
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::Refresh => write!(f, "Refresh"),
            Action::Send(request) => write!(f, "Send({})", request.label()),
            Action::Submit(mutation) => write!(f, "Submit({:?})", mutation.kind()),
            Action::Notify(notice) => write!(f, "Notify({})", notice.text),
        }
    }
}
