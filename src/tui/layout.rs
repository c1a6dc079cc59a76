//! Layout definitions for the TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen plus status bar
pub struct AppLayout {
    pub main: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        Self {
            main: vertical[0],
            status_bar: vertical[1],
        }
    }
}

/// Regions of the dashboard screen
pub struct DashboardLayout {
    pub inputs: Rect,
    pub summary: Rect,
    pub balance: Rect,
    pub accounts: Rect,
    pub history: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(15), // Inputs and summary
                Constraint::Length(1),  // Balance line
                Constraint::Length(9),  // Six accounts + header + borders
                Constraint::Min(3),     // History
            ])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        Self {
            inputs: top[0],
            summary: top[1],
            balance: rows[1],
            accounts: rows[2],
            history: rows[3],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Top-right corner area for toast notifications
pub fn notification_area(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}
