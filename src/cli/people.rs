//! Lending and borrowing CLI commands
//!
//! Implements the commands that open or settle a debt with a named person,
//! and the combined listing of both sides.

use crate::config::Settings;
use crate::display::{format_borrowing_list, format_lending_list, format_settlement};
use crate::error::LedgerResult;
use crate::models::Side;
use crate::services::Ledger;

use super::parse_amount;

/// Counterparty actions
#[derive(Debug, Clone)]
pub enum PeopleCommand {
    Lend { name: String, amount: String },
    Repay { name: String, amount: String },
    Borrow { name: String, amount: String },
    Return { name: String, amount: String },
    List,
}

/// Handle a counterparty command
pub fn handle_people_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: PeopleCommand,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        PeopleCommand::Lend { name, amount } => {
            let amount = parse_amount(&amount)?;
            ledger.lend(&name, amount)?;
            println!("Lent {} to {}.", amount.format_with_symbol(symbol), name);
        }

        PeopleCommand::Repay { name, amount } => {
            let amount = parse_amount(&amount)?;
            let settlement = ledger.receive_repayment(&name, amount)?;
            println!("{}", format_settlement(Side::Assets, &name, settlement, symbol));
        }

        PeopleCommand::Borrow { name, amount } => {
            let amount = parse_amount(&amount)?;
            ledger.borrow(&name, amount)?;
            println!("You now owe {} {}.", name, amount.format_with_symbol(symbol));
        }

        PeopleCommand::Return { name, amount } => {
            let amount = parse_amount(&amount)?;
            let settlement = ledger.return_money(&name, amount)?;
            println!(
                "{}",
                format_settlement(Side::Liabilities, &name, settlement, symbol)
            );
        }

        PeopleCommand::List => {
            println!("People who owe me:");
            print!(
                "{}",
                format_lending_list(ledger.assets(), symbol, &settings.date_format)
            );
            println!();
            println!("People I owe:");
            print!("{}", format_borrowing_list(ledger.liabilities(), symbol));
        }
    }

    Ok(())
}
