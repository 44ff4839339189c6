use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use expense_ledger::cli::{handle_ledger_command, Commands};
use expense_ledger::config::{paths::DATA_DIR_ENV, LedgerPaths, Settings};
use expense_ledger::menu::{Menu, Prompter};
use expense_ledger::services::Ledger;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal finance ledger for the terminal",
    long_about = "Tracks a wallet balance, income and expenses, money lent to \
                  others and money borrowed from them. Run without a command \
                  for the interactive menu."
)]
struct Cli {
    /// Directory holding expense_data.json, expense_report.csv and config.json
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::resolve(cli.data_dir.as_deref())?;
    paths.ensure_directories()?;
    let mut settings = Settings::load_or_default(&paths)?;

    let mut ledger = Ledger::open(&paths)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let mut menu = Menu::new(&mut ledger, &settings, stdin.lock(), io::stdout());
            menu.run()?;
            println!("Goodbye!");
        }
        Commands::Reset { yes } => {
            let confirmed = yes || {
                let stdin = io::stdin();
                let mut prompter = Prompter::new(stdin.lock(), io::stdout());
                prompter.confirm("Reset all data? (y/n): ")?
            };
            if confirmed {
                ledger.reset_all()?;
                println!("All data has been reset to 0.");
            } else {
                println!("Reset cancelled.");
            }
        }
        Commands::Config {
            currency,
            date_format,
        } => {
            let changed = currency.is_some() || date_format.is_some();
            if let Some(symbol) = currency {
                settings.currency_symbol = symbol;
            }
            if let Some(format) = date_format {
                settings.date_format = format;
            }
            if changed {
                settings.save(&paths)?;
                println!("Settings saved.");
                println!();
            }

            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Report file:    {}", paths.report_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        cmd => handle_ledger_command(&mut ledger, &settings, cmd)?,
    }

    Ok(())
}
