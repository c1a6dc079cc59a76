//! Transaction history display formatting

use crate::models::{TransactionHistory, TransactionRecord};

/// Format one completed transfer
pub fn format_record(record: &TransactionRecord, symbol: &str) -> String {
    format!(
        "{}  {}  {} -> {}  {}",
        record.date.format("%Y-%m-%d %H:%M:%S"),
        record.id,
        record.from_account,
        record.to_account,
        record.amount.format_with_symbol(symbol),
    )
}

/// Format the session history, newest last
pub fn format_history(history: &TransactionHistory, symbol: &str) -> String {
    if history.is_empty() {
        return "No transfers this session.".to_string();
    }

    let mut output = String::new();
    for record in history.entries() {
        output.push_str(&format_record(record, symbol));
        output.push('\n');
    }
    output.push_str(&format!(
        "Total transferred: {}\n",
        history.total().format_with_symbol(symbol)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransferId};
    use chrono::Utc;

    #[test]
    fn test_format_history() {
        let mut history = TransactionHistory::new();
        assert_eq!(format_history(&history, "$"), "No transfers this session.");

        history.append(TransactionRecord {
            id: TransferId::new(),
            date: Utc::now(),
            from_account: "Income".into(),
            to_account: "GST".into(),
            amount: Money::from_cents(10000),
        });
        let output = format_history(&history, "$");
        assert!(output.contains("Income -> GST  $100.00"));
        assert!(output.contains("Total transferred: $100.00"));
    }
}
