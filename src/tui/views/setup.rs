//! Setup screen
//!
//! A form of six accounts by three bank details. Tab moves through the
//! fields in reading order; Enter saves and tries to complete setup.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Account, AccountSlot, AccountType, BankField};
use crate::tui::app::App;
use crate::tui::widgets::TextInput;

/// Inputs for one account row
#[derive(Debug, Clone)]
struct AccountRow {
    slot: AccountSlot,
    name: String,
    account_type: AccountType,
    inputs: [TextInput; 3],
}

/// State of the setup form
#[derive(Debug, Clone)]
pub struct SetupFormState {
    rows: Vec<AccountRow>,
    /// Index into the flattened rows x fields grid
    focus: usize,
}

impl SetupFormState {
    /// Prefill the form from the stored drafts
    pub fn from_accounts(accounts: &[Account]) -> Self {
        let rows = accounts
            .iter()
            .map(|account| AccountRow {
                slot: account.slot,
                name: account.name.clone(),
                account_type: account.account_type,
                inputs: BankField::ALL.map(|field| {
                    TextInput::new()
                        .label(field.to_string())
                        .placeholder(format!("Enter {}", field))
                        .content(account.field(field))
                }),
            })
            .collect();

        Self { rows, focus: 0 }
    }

    fn field_count(&self) -> usize {
        self.rows.len() * BankField::ALL.len()
    }

    /// (row, field) of the focused input
    pub fn focus(&self) -> (usize, usize) {
        (self.focus / BankField::ALL.len(), self.focus % BankField::ALL.len())
    }

    pub fn focus_next(&mut self) {
        if self.field_count() > 0 {
            self.focus = (self.focus + 1) % self.field_count();
        }
    }

    pub fn focus_prev(&mut self) {
        if self.field_count() > 0 {
            self.focus = (self.focus + self.field_count() - 1) % self.field_count();
        }
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        let (row, field) = self.focus();
        self.rows.get_mut(row).map(|r| &mut r.inputs[field])
    }

    /// Copy the form values onto the drafts they came from
    pub fn apply_to(&self, mut accounts: Vec<Account>) -> Vec<Account> {
        for account in &mut accounts {
            if let Some(row) = self.rows.iter().find(|r| r.slot == account.slot) {
                for (field, input) in BankField::ALL.iter().zip(row.inputs.iter()) {
                    account.set_field(*field, input.value().trim());
                }
            }
        }
        accounts
    }
}

fn type_color(account_type: AccountType) -> Color {
    match account_type {
        AccountType::Income => Color::Green,
        AccountType::Core => Color::Blue,
        AccountType::Vault => Color::Magenta,
    }
}

/// Render the setup screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Account Setup ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &app.setup_form;
    let (focus_row, focus_field) = form.focus();

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(form.rows.iter().map(|_| Constraint::Length(5)));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    frame.render_widget(
        Paragraph::new("Enter the bank details for each of your Profit First accounts.")
            .style(Style::default().fg(Color::White)),
        chunks[0],
    );

    for (i, row) in form.rows.iter().enumerate() {
        let area = chunks[i + 1];
        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", row.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("({}) ", row.account_type),
                Style::default().fg(type_color(row.account_type)),
            ),
        ]);
        let row_block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(if i == focus_row {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            });
        let row_inner = row_block.inner(area);
        frame.render_widget(row_block, area);

        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1); 3])
            .split(row_inner);
        for (f, input) in row.inputs.iter().enumerate() {
            let mut input = input.clone();
            input.focused = i == focus_row && f == focus_field;
            frame.render_widget(&input, lines[f]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountRegistry;

    fn form() -> SetupFormState {
        SetupFormState::from_accounts(&AccountRegistry::default_drafts())
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = form();
        assert_eq!(form.focus(), (0, 0));
        form.focus_prev();
        assert_eq!(form.focus(), (5, 2));
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), (0, 1));
    }

    #[test]
    fn test_typing_lands_on_the_right_draft() {
        let mut form = form();
        form.focus_next(); // income / account number
        form.focus_next(); // income / bank name
        form.focus_next(); // gst / bsb
        for c in "062-000".chars() {
            form.focused_input_mut().unwrap().insert(c);
        }

        let drafts = form.apply_to(AccountRegistry::default_drafts());
        assert_eq!(drafts[1].slot, AccountSlot::Gst);
        assert_eq!(drafts[1].bsb, "062-000");
        assert!(drafts[0].bsb.is_empty());
    }

    #[test]
    fn test_prefills_from_drafts() {
        let mut drafts = AccountRegistry::default_drafts();
        drafts[2].bank_name = "ING".into();
        let form = SetupFormState::from_accounts(&drafts);

        let round = form.apply_to(AccountRegistry::default_drafts());
        assert_eq!(round[2].bank_name, "ING");
    }
}
