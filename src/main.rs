use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};

use finance_dashboard::cli::{
    handle_export_command, handle_report_command, handle_transaction_command, load_session,
    resolve_period, CommandContext, ExportCommands, ReportCommands, TransactionCommands,
};
use finance_dashboard::config::{paths::DashboardPaths, settings::Settings};
use finance_dashboard::display::format_category_list;
use finance_dashboard::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "findash",
    version,
    about = "Personal finance dashboard for the terminal",
    long_about = "findash summarizes your expenses: monthly totals, spending by \
                  category, budget versus actual, and insights such as budget \
                  alerts and month-over-month trends."
)]
struct Cli {
    /// Data file with transactions and budgets (.json, .yaml, .yml or .csv)
    #[arg(long, global = true, env = "FINDASH_DATA")]
    data: Option<PathBuf>,

    /// Reference month for "this month" views (YYYY-MM or YYYY-MM-DD)
    #[arg(long, global = true)]
    now: Option<String>,

    /// Budget override as CATEGORY=AMOUNT; repeat to set several
    #[arg(long = "budget", global = true, value_name = "CATEGORY=AMOUNT")]
    budgets: Vec<String>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dashboard reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Browse transactions
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// List the built-in categories and their budgets
    Categories,

    /// Export data and derived views
    #[command(subcommand)]
    Export(ExportCommands),

    /// Write the default settings file
    Init {
        /// Data file to use when --data is not given
        #[arg(long)]
        default_data: Option<PathBuf>,
    },

    /// Show configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = DashboardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("findash - personal finance dashboard");
            println!();
            println!("Run 'findash --help' for usage information.");
            println!("Run 'findash --data expenses.json report dashboard' to see your dashboard.");
            return Ok(());
        }
    };

    match command {
        Commands::Init { default_data } => {
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
                return Ok(());
            }
            let mut settings = settings;
            settings.default_data_file = default_data;
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Commands::Config => {
            println!("findash Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Date format:          {}", settings.date_format);
            println!("  Top categories shown: {}", settings.top_category_limit);
            println!("  Recent transactions:  {}", settings.recent_transaction_limit);
            match &settings.default_data_file {
                Some(path) => println!("  Default data file:    {}", path.display()),
                None => println!("  Default data file:    (none)"),
            }
        }
        Commands::Report(cmd) => {
            let ctx =
                build_context(cli.data.as_deref(), cli.now.as_deref(), &cli.budgets, settings)?;
            handle_report_command(&ctx, cmd)?;
        }
        Commands::Transaction(cmd) => {
            let ctx =
                build_context(cli.data.as_deref(), cli.now.as_deref(), &cli.budgets, settings)?;
            handle_transaction_command(&ctx, cmd)?;
        }
        Commands::Export(cmd) => {
            let ctx =
                build_context(cli.data.as_deref(), cli.now.as_deref(), &cli.budgets, settings)?;
            handle_export_command(&ctx, cmd)?;
        }
        Commands::Categories => {
            let ctx =
                build_context(cli.data.as_deref(), cli.now.as_deref(), &cli.budgets, settings)?;
            print!("{}", format_category_list(ctx.store.budgets(), &ctx.style()));
        }
    }

    Ok(())
}

/// Load the session for commands that read dashboard data
fn build_context(
    data: Option<&Path>,
    now: Option<&str>,
    budgets: &[String],
    settings: Settings,
) -> Result<CommandContext> {
    let period = resolve_period(now)?;
    let store = load_session(data, &settings, budgets)
        .context("Failed to load dashboard data")?;
    Ok(CommandContext::new(store, settings, period))
}
