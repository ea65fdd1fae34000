//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the section sidebar
const SIDEBAR_WIDTH: u16 = 22;

/// Main screen layout areas
pub struct MainLayout {
    /// Section list; absent on the login screen
    pub sidebar: Option<Rect>,
    pub content: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect, with_sidebar: bool) -> MainLayout {
    // Main vertical layout: content + status line + help bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let (sidebar, content) = if with_sidebar {
        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(main_chunks[0]);
        (Some(horizontal_chunks[0]), horizontal_chunks[1])
    } else {
        (None, main_chunks[0])
    };

    MainLayout {
        sidebar,
        content,
        status: main_chunks[1],
        help: main_chunks[2],
    }
}

/// Split a content area into a fixed-height header and the rest
pub fn split_header(area: Rect, header_height: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(header_height), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_is_clamped() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = centered_popup(area, 40, 7);
        assert_eq!(popup.width, 30);
        assert_eq!(popup.x, 0);
        assert_eq!(popup.y, 1);
    }

    #[test]
    fn test_centered_popup_respects_offset() {
        let area = Rect::new(10, 5, 40, 20);
        let popup = centered_popup(area, 20, 10);
        assert_eq!(popup, Rect::new(20, 10, 20, 10));
    }

    #[test]
    fn test_layout_without_sidebar() {
        let layout = calculate_main_layout(Rect::new(0, 0, 100, 30), false);
        assert!(layout.sidebar.is_none());
        assert_eq!(layout.content.width, 100);
        assert_eq!(layout.content.height, 28);
        assert_eq!(layout.help.y, 29);
    }

    #[test]
    fn test_layout_with_sidebar() {
        let layout = calculate_main_layout(Rect::new(0, 0, 100, 30), true);
        assert_eq!(layout.sidebar.map(|r| r.width), Some(SIDEBAR_WIDTH));
        assert_eq!(layout.content.x, SIDEBAR_WIDTH);
        assert_eq!(layout.status.height, 1);
    }
}
