//! fintrack binary entry point

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use fintrack::backend::CsvFileBackend;
use fintrack::cli::{
    demo_records, handle_add_command, handle_dashboard_command, handle_export_command,
    handle_list_command, report_reload, AddArgs, DashboardArgs,
};
use fintrack::config::{FintrackPaths, Settings};
use fintrack::session::Session;

#[derive(Parser)]
#[command(name = "fintrack")]
#[command(about = "Terminal-based personal finance tracker", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new entry
    Add(AddArgs),
    /// List all recorded transactions
    List,
    /// Show KPIs, category breakdown and balance series for a period
    Dashboard(DashboardArgs),
    /// Export the ledger as CSV
    Export {
        /// Output file; defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Initialize fintrack directories and settings
    Init {
        /// Seed the ledger with two months of example entries
        #[arg(long)]
        demo: bool,
    },
    /// Show the active configuration and data paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FintrackPaths::new().context("could not resolve the data directory")?;
    let settings = Settings::load_or_create(&paths).context("could not load settings")?;

    match cli.command {
        Commands::Init { demo } => handle_init(&paths, &settings, demo)?,
        Commands::Config => handle_config(&paths, &settings),
        command => {
            let backend = CsvFileBackend::new(paths.ledger_file());
            let mut session = Session::new(Box::new(backend));
            let report = session.reload().context("could not load the ledger")?;
            report_reload(&session, &report);

            match command {
                Commands::Add(args) => handle_add_command(&mut session, args)?,
                Commands::List => handle_list_command(&session, &settings)?,
                Commands::Dashboard(args) => {
                    handle_dashboard_command(&session, &settings, args)?
                }
                Commands::Export { output } => handle_export_command(&session, output)?,
                Commands::Init { .. } | Commands::Config => unreachable!(),
            }
        }
    }

    Ok(())
}

/// Create the data directories, persist settings and optionally seed the
/// demo ledger.
fn handle_init(paths: &FintrackPaths, settings: &Settings, demo: bool) -> Result<()> {
    paths.ensure_directories()?;
    settings.save(paths)?;
    println!("Initialized fintrack in {}", paths.base_dir().display());

    if demo {
        let backend = CsvFileBackend::new(paths.ledger_file());
        let mut session = Session::new(Box::new(backend));
        session.reload().context("could not load the ledger")?;

        let records = demo_records();
        let seeded = records.len();
        for record in records {
            session.record(&record)?;
        }
        println!("Seeded {} demo entries.", seeded);
    }

    Ok(())
}

fn handle_config(paths: &FintrackPaths, settings: &Settings) {
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("Ledger file:     {}", paths.ledger_file().display());
    println!("Currency symbol: {}", settings.currency_symbol);
    println!("Date format:     {}", settings.date_format);
    println!(
        "Initialized:     {}",
        if paths.is_initialized() { "yes" } else { "no" }
    );
}
