//! Transfer confirmation dialog

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::services::PendingTransfer;
use crate::tui::layout::centered_rect_fixed;

/// Render the confirmation for a staged transfer
pub fn render(frame: &mut Frame, pending: &PendingTransfer, symbol: &str) {
    let area = centered_rect_fixed(54, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm Transfer ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("Transfer "),
            Span::styled(
                pending.amount.format_with_symbol(symbol),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("from {} ({})", pending.from.name, pending.from.account_number)),
        Line::from(format!("to   {} ({})", pending.to.name, pending.to.account_number)),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Confirm  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
