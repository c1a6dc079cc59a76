//! Account display formatting
//!
//! Formats the six accounts and their bank details for terminal output.

use crate::models::{Account, BankField};

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// Format the accounts as a table
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name.len())
        .max()
        .unwrap_or(4)
        .max(4);
    let bank_width = accounts
        .iter()
        .map(|a| or_dash(&a.bank_name).len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<6}  {:<8}  {:<14}  {:<bank_width$}  {}\n",
        "Name",
        "Type",
        "BSB",
        "Account Number",
        "Bank",
        "Status",
        name_width = name_width,
        bank_width = bank_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<6}  {:-<8}  {:-<14}  {:-<bank_width$}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        bank_width = bank_width,
    ));

    for account in accounts {
        let status = match account.missing_field() {
            Some(field) => format!("missing {}", field),
            None => "ready".to_string(),
        };
        output.push_str(&format!(
            "{:<name_width$}  {:<6}  {:<8}  {:<14}  {:<bank_width$}  {}\n",
            account.name,
            account.account_type.to_string(),
            or_dash(&account.bsb),
            or_dash(&account.account_number),
            or_dash(&account.bank_name),
            status,
            name_width = name_width,
            bank_width = bank_width,
        ));
    }

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account) -> String {
    let mut output = format!("Account: {}\n", account.name);
    output.push_str(&format!("  Key:            {}\n", account.slot.key()));
    output.push_str(&format!("  Type:           {}\n", account.account_type));
    for field in BankField::ALL {
        output.push_str(&format!(
            "  {:<16}{}\n",
            format!("{}:", field),
            or_dash(account.field(field))
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountSlot;

    #[test]
    fn test_list_shows_missing_fields() {
        let mut gst = Account::draft(AccountSlot::Gst);
        gst.bsb = "062-000".into();
        let output = format_account_list(&[Account::draft(AccountSlot::Income), gst]);

        assert!(output.contains("Income"));
        assert!(output.contains("missing BSB"));
        assert!(output.contains("missing Account Number"));
        assert!(output.contains("062-000"));
    }

    #[test]
    fn test_details() {
        let mut tax = Account::draft(AccountSlot::Tax);
        tax.bank_name = "Westpac".into();
        let output = format_account_details(&tax);
        assert!(output.contains("Account: Tax"));
        assert!(output.contains("Vault"));
        assert!(output.contains("Bank Name:      Westpac"));
    }
}
