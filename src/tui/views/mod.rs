//! TUI Views module
//!
//! The setup and dashboard screens, the status bar, and the overlays drawn
//! on top of them.

pub mod dashboard;
pub mod setup;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App, Screen};
use super::dialogs;
use super::layout::{notification_area, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    match app.screen {
        Screen::Setup => setup::render(frame, app, layout.main),
        Screen::Dashboard => dashboard::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if let ActiveDialog::ConfirmTransfer(pending) = &app.active_dialog {
        dialogs::confirm::render(frame, pending, &app.settings.currency_symbol);
    }

    if let Some(notification) = app.notifications.current() {
        let area = notification_area(48, 5, layout.main);
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}
