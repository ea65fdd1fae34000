//! Component trait - Interface for UI components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

use crate::action::Action;
use crate::services::dispatch::{Reply, Request};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// Components are self-contained units that:
/// - Handle their own key events
/// - Maintain local state
/// - Render themselves to a frame
///
/// The pattern follows:
/// 1. `handle_key_event` - Convert events to Actions
/// 2. `update` - Process Actions and update state
/// 3. `draw` - Render the component
pub trait Component {
    /// Initialize the component
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle a key event, returning an optional Action
    ///
    /// This method converts key events into semantic Actions.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Update component state based on an Action
    ///
    /// The method can optionally return a follow-up Action (e.g. a list
    /// moving to the next page returns the fetch for that page).
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component to the frame
    ///
    /// This method should be pure rendering - no state changes.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}

/// A full-screen component bound to a route
///
/// The App owns exactly one screen at a time. It issues the screen's
/// requests on entry and on refresh, and hands back every reply from the
/// current navigation generation.
pub trait Screen: Component {
    /// Fetches to run when the screen is entered or refreshed
    fn load(&mut self) -> Vec<Request>;

    /// Consume a reply to one of this screen's requests
    fn apply(&mut self, reply: Reply) -> Option<Action>;

    /// True while the screen captures raw text input, which disables
    /// global shortcuts
    fn is_editing(&self) -> bool {
        false
    }

    /// `(key, label)` pairs for the help bar
    fn hints(&self) -> Vec<(&'static str, &'static str)>;
}
