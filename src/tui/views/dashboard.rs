//! Dashboard screen
//!
//! Income and percentage inputs on the left, the allocation summary on the
//! right, then the accounts with their transfer amounts and the session
//! history underneath.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::money::format_amount;
use crate::models::{Account, AccountType, PercentageField};
use crate::services::Dashboard;
use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;
use crate::tui::widgets::TextInput;

/// Which panel has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Inputs,
    Accounts,
}

const GAUGE_COLORS: [Color; 5] = [
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
    Color::Red,
];

/// Dashboard session plus the widgets editing it
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub session: Dashboard,
    pub income_input: TextInput,
    pub percentage_inputs: [TextInput; 6],
    pub focused_panel: FocusedPanel,
    /// 0 is income, 1..=6 the percentages in `PercentageField::ALL` order
    pub focused_field: usize,
    pub selected_account: usize,
}

impl DashboardState {
    pub fn new(session: Dashboard) -> Self {
        let percentages = *session.percentages();
        let percentage_inputs = PercentageField::ALL.map(|field| {
            TextInput::new()
                .label(format!("{:<12}", field.label()))
                .content(percentages.get(field).to_string())
        });

        Self {
            session,
            income_input: TextInput::new()
                .label(format!("{:<12}", "Income"))
                .placeholder("Enter income amount"),
            percentage_inputs,
            focused_panel: FocusedPanel::Inputs,
            focused_field: 0,
            selected_account: 0,
        }
    }

    pub fn toggle_panel(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Inputs => FocusedPanel::Accounts,
            FocusedPanel::Accounts => FocusedPanel::Inputs,
        };
    }

    pub fn focus_next(&mut self) {
        self.focused_field = (self.focused_field + 1) % 7;
    }

    pub fn focus_prev(&mut self) {
        self.focused_field = (self.focused_field + 6) % 7;
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused_field {
            0 => &mut self.income_input,
            n => &mut self.percentage_inputs[(n - 1).min(5)],
        }
    }

    /// Push the text of every input into the session
    pub fn sync_inputs(&mut self) {
        self.session.set_income(self.income_input.number());
        for (field, input) in PercentageField::ALL.iter().zip(self.percentage_inputs.iter()) {
            self.session.set_percentage(*field, input.number());
        }
    }

    /// Move the focused percentage like a 0-100 slider
    ///
    /// Does nothing on the income field or when the text isn't a number.
    pub fn nudge(&mut self, delta: f64) {
        if self.focused_field == 0 {
            return;
        }
        let input = self.focused_input_mut();
        let current = input.number();
        if current.is_nan() {
            return;
        }
        let next = (current + delta).clamp(0.0, 100.0);
        input.set_value(next.to_string());
        self.sync_inputs();
    }

    pub fn accounts(&self) -> &[Account] {
        self.session.registry().accounts()
    }

    pub fn selected_account(&self) -> Option<&Account> {
        self.accounts().get(self.selected_account)
    }

    pub fn select_next(&mut self) {
        let len = self.accounts().len();
        if len > 0 {
            self.selected_account = (self.selected_account + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_account = self.selected_account.saturating_sub(1);
    }
}

/// Render the dashboard screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(state) = app.dashboard.as_ref() else {
        return;
    };
    let layout = DashboardLayout::new(area);
    let symbol = app.settings.currency_symbol.as_str();

    render_inputs(frame, state, layout.inputs);
    render_summary(frame, state, symbol, layout.summary);
    render_balance(frame, app, state, symbol, layout.balance);
    render_accounts(frame, state, symbol, layout.accounts);
    render_history(frame, state, symbol, layout.history);
}

fn panel_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        })
}

fn render_inputs(frame: &mut Frame, state: &DashboardState, area: Rect) {
    let focused = state.focused_panel == FocusedPanel::Inputs;
    let block = panel_block(" Income and Allocations ", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inputs = std::iter::once(&state.income_input).chain(state.percentage_inputs.iter());
    for (i, input) in inputs.enumerate() {
        let row = i as u16 * 2;
        if row >= inner.height {
            break;
        }
        let mut input = input.clone();
        input.focused = focused && i == state.focused_field;
        if i > 0 {
            input.label = format!("{} %", input.label);
        }
        frame.render_widget(&input, Rect::new(inner.x, inner.y + row, inner.width, 1));
    }
}

fn render_summary(frame: &mut Frame, state: &DashboardState, symbol: &str, area: Rect) {
    let block = panel_block(" Allocation Summary ", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (i, allocation) in state.session.allocations().iter().enumerate() {
        let row = i as u16 * 2;
        if row + 1 >= inner.height {
            break;
        }
        let label = Line::from(vec![
            Span::raw(format!("{:<12}", allocation.name())),
            Span::styled(
                format_amount(allocation.amount, symbol),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" ({}%)", allocation.percentage)),
        ]);
        frame.render_widget(
            Paragraph::new(label),
            Rect::new(inner.x, inner.y + row, inner.width, 1),
        );

        let ratio = if allocation.percentage.is_finite() {
            (allocation.percentage / 100.0).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(GAUGE_COLORS[i % GAUGE_COLORS.len()]))
            .label("")
            .ratio(ratio);
        frame.render_widget(gauge, Rect::new(inner.x, inner.y + row + 1, inner.width, 1));
    }
}

fn render_balance(frame: &mut Frame, app: &App, state: &DashboardState, symbol: &str, area: Rect) {
    let balance = match state.session.balance() {
        Some(balance) => Span::styled(
            format!(
                "Balance: {} {}",
                balance.format_with_symbol(symbol),
                app.settings.provider.currency
            ),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("Balance: press b to check", Style::default().fg(Color::DarkGray)),
    };

    let mut spans = vec![Span::raw(" "), balance];
    if app.in_flight > 0 {
        spans.push(Span::styled(
            format!("  ({} request(s) in progress)", app.in_flight),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_accounts(frame: &mut Frame, state: &DashboardState, symbol: &str, area: Rect) {
    let focused = state.focused_panel == FocusedPanel::Accounts;

    let header = Row::new(vec!["Account", "Type", "BSB", "Account No.", "Transfer"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = state
        .accounts()
        .iter()
        .map(|account| {
            let color = match account.account_type {
                AccountType::Income => Color::Green,
                AccountType::Core => Color::Blue,
                AccountType::Vault => Color::Magenta,
            };
            let transfer = if account.can_receive_transfer() {
                format_amount(state.session.transfer_amount_for(account), symbol)
            } else {
                "source".to_string()
            };
            Row::new(vec![
                account.name.clone(),
                account.account_type.to_string(),
                account.bsb.clone(),
                account.account_number.clone(),
                transfer,
            ])
            .style(Style::default().fg(color))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(14),
            Constraint::Min(12),
        ],
    )
    .header(header)
    .block(panel_block(" Accounts ", focused))
    .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut table_state = TableState::default();
    if focused {
        table_state.select(Some(state.selected_account));
    }
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_history(frame: &mut Frame, state: &DashboardState, symbol: &str, area: Rect) {
    let items: Vec<ListItem> = state
        .session
        .history()
        .entries()
        .iter()
        .rev()
        .map(|record| {
            ListItem::new(format!(
                "{} - {} from {} to {}",
                record.date.format("%Y-%m-%d %H:%M:%S"),
                record.amount.format_with_symbol(symbol),
                record.from_account,
                record.to_account
            ))
        })
        .collect();

    let list = List::new(items).block(panel_block(" Transaction History ", false));
    frame.render_widget(list, area);
}
