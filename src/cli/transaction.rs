//! Income and expense CLI commands

use crate::error::LedgerResult;
use crate::models::TransactionKind;
use crate::services::Ledger;

use super::parse_amount;

/// A one-shot income or expense entry
#[derive(Debug, Clone)]
pub struct TransactionArgs {
    pub kind: TransactionKind,
    pub amount: String,
    pub category: String,
}

impl TransactionArgs {
    pub fn income(amount: String, source: String) -> Self {
        Self {
            kind: TransactionKind::Income,
            amount,
            category: source,
        }
    }

    pub fn expense(amount: String, category: String) -> Self {
        Self {
            kind: TransactionKind::Expense,
            amount,
            category,
        }
    }
}

/// Record the transaction and print the new balance
pub fn handle_transaction_command(
    ledger: &mut Ledger,
    symbol: &str,
    args: TransactionArgs,
) -> LedgerResult<()> {
    let amount = parse_amount(&args.amount)?;
    ledger.record_transaction(amount, &args.category, args.kind)?;

    println!(
        "Recorded {}: {} ({})",
        args.kind.as_str(),
        amount.format_with_symbol(symbol),
        args.category
    );
    println!("Wallet balance: {}", ledger.balance().format_with_symbol(symbol));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_records_income_and_expense() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::from_file(temp_dir.path().join("ledger.json")).unwrap();

        handle_transaction_command(
            &mut ledger,
            "₹",
            TransactionArgs::income("5000".into(), "Salary".into()),
        )
        .unwrap();
        handle_transaction_command(
            &mut ledger,
            "₹",
            TransactionArgs::expense("1200".into(), "Groceries".into()),
        )
        .unwrap();

        assert_eq!(ledger.balance(), Money::from_units(3800));
        assert_eq!(ledger.transactions()[1].category, "Groceries");
    }

    #[test]
    fn test_bad_amount_records_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::from_file(temp_dir.path().join("ledger.json")).unwrap();

        let result = handle_transaction_command(
            &mut ledger,
            "₹",
            TransactionArgs::income("ten".into(), "Gift".into()),
        );

        assert!(matches!(result, Err(LedgerError::InvalidAmount(_))));
        assert!(ledger.transactions().is_empty());
    }
}
