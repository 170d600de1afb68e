use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser, Subcommand};

use spendtrack::cli::{dispatch, parse_date, run_shell, LedgerCommand, Session};
use spendtrack::config::{Settings, TrackerPaths};
use spendtrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendtrack",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based expense tracking with monthly budget goals",
    long_about = "SpendTrack records expenses by category, tracks spending against \
                  monthly budgets and reports where the money went. The ledger lives \
                  in memory for one session; only preferences are saved."
)]
struct Cli {
    /// Start from a ledger snapshot (JSON) instead of the sample data
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "empty")]
    data: Option<PathBuf>,

    /// Start with an empty ledger
    #[arg(long, global = true)]
    empty: bool,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, global = true, env = "SPENDTRACK_TODAY", value_name = "DATE")]
    today: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run commands interactively against one session
    #[command(alias = "repl")]
    Shell,

    #[command(flatten)]
    Ledger(LedgerCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let today = match cli.today.as_deref() {
        Some(date) => parse_date(date)?,
        None => Local::now().date_naive(),
    };

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;
    let storage = load_storage(&cli, today)?;

    let mut session = Session::new(storage, settings, paths, today);

    match cli.command {
        Some(Commands::Shell) => run_shell(&mut session, io::stdin().lock())?,
        Some(Commands::Ledger(cmd)) => dispatch(&mut session, cmd)?,
        None => {
            println!("SpendTrack - expense tracking with monthly budgets");
            println!();
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

fn load_storage(cli: &Cli, today: NaiveDate) -> Result<Storage> {
    if let Some(path) = &cli.data {
        return Storage::load_snapshot(path)
            .with_context(|| format!("Failed to load ledger from {}", path.display()));
    }

    Ok(if cli.empty {
        Storage::new()
    } else {
        Storage::sample(today)
    })
}
