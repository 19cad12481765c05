use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_ledger::cli::{
    handle_add, handle_category_command, handle_currency_command, handle_history, handle_list,
    handle_summary, AddArgs, CategoryCommands, CurrencyCommands,
};
use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::models::DEFAULT_CATEGORIES;
use expense_ledger::storage::{initialize_storage, needs_initialization};
use expense_ledger::Session;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Record and summarize personal expenses",
    long_about = "Expense Ledger keeps dated, categorized expenses in a plain CSV file \
                  and summarizes where the money went, category by category."
)]
struct Cli {
    /// Directory holding the ledger files
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add(AddArgs),

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Show totals by category
    Summary,

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Currency commands
    #[command(subcommand)]
    Currency(CurrencyCommands),

    /// Show recent changes to the ledger
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the ledger files
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    let level = if cli.verbose {
        "debug"
    } else {
        settings.log_level.as_str()
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("expense_ledger={level}")))
        .with_writer(std::io::stderr)
        .init();

    let open_session = || Session::open_with_settings(paths.clone(), settings.clone());

    match cli.command {
        Some(Commands::Init) => {
            if !needs_initialization(&paths) {
                println!(
                    "Expense Ledger is already initialized at: {}",
                    paths.base_dir().display()
                );
                return Ok(());
            }

            println!("Initializing Expense Ledger at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default categories: {}", DEFAULT_CATEGORIES.join(", "));
            println!("Run 'expense currency set <CODE>' to choose a currency.");
        }
        Some(Commands::Config) => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expenses:       {}", paths.expenses_file().display());
            println!("Categories:     {}", paths.categories_file().display());
            println!("Currency:       {}", paths.currency_file().display());
            println!("Settings:       {}", paths.settings_file().display());
            println!(
                "Initialized:    {}",
                if needs_initialization(&paths) { "no" } else { "yes" }
            );
            println!();
            println!("Settings:");
            println!("  Malformed rows: {:?}", settings.malformed_rows);
            println!("  Log level:      {}", settings.log_level);
            println!("  Date format:    {}", settings.date_format);
        }
        Some(Commands::Add(args)) => handle_add(&mut open_session()?, args)?,
        Some(Commands::List) => handle_list(&open_session()?)?,
        Some(Commands::Summary) => handle_summary(&open_session()?)?,
        Some(Commands::Category(cmd)) => handle_category_command(&mut open_session()?, cmd)?,
        Some(Commands::Currency(cmd)) => handle_currency_command(&mut open_session()?, cmd)?,
        Some(Commands::History { limit }) => handle_history(&open_session()?, limit)?,
        None => {
            println!("Expense Ledger - record and summarize personal expenses");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense add 12.50 \"Lunch\" -c Food' to record an expense.");
        }
    }

    Ok(())
}
