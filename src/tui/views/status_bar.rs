//! Status bar view
//!
//! Screen name, session totals and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Screen};

fn hints(app: &App) -> &'static str {
    match app.screen {
        Screen::Setup => " Tab:Next  Shift-Tab:Prev  Enter:Save  Esc:Quit ",
        Screen::Dashboard => {
            " Tab:Panel  ↑↓:Move  ←→:Adjust  b:Balance  t:Transfer  q:Quit "
        }
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    let screen = match app.screen {
        Screen::Setup => " SETUP ",
        Screen::Dashboard => " DASHBOARD ",
    };
    spans.push(Span::styled(
        screen,
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    if let Some(dashboard) = app.dashboard.as_ref() {
        let history = dashboard.session.history();
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!(
                "{} transfer(s), {} this session",
                history.len(),
                history.total().format_with_symbol(&app.settings.currency_symbol)
            ),
            Style::default().fg(Color::White),
        ));
    }

    let hints = hints(app);
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
