//! Quotebook CLI - Command-line interface for Quotebook
//!
//! Provides `quotebook show`, `quotebook add`, `quotebook sync`, the
//! interactive `quotebook shell`, and the other list commands.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::session::SessionCommands;

#[derive(Parser)]
#[command(name = "quotebook")]
#[command(about = "Quotebook - quote of the day manager")]
#[command(version)]
struct Cli {
    /// Data directory (defaults to $QUOTEBOOK_HOME or ~/.quotebook)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current display, filter and quote count
    Status,
    /// Show a random quote from the active category
    Show,
    /// Add a new quote
    Add {
        /// Quote text
        text: String,
        /// Quote category
        category: String,
    },
    /// List quotes in the active category
    List {
        /// Ignore the active filter
        #[arg(long)]
        all: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List known categories
    Categories,
    /// Set the active category filter ("all" clears it)
    Filter {
        /// Category name or "all"
        category: String,
    },
    /// Export all quotes to a JSON file
    Export {
        /// Output file
        #[arg(short, long, default_value = quotebook_core::transfer::DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },
    /// Import quotes from a JSON file
    Import {
        /// JSON file containing an array of quotes
        file: PathBuf,
        /// Replace the current list instead of appending
        #[arg(long)]
        replace: bool,
    },
    /// Sync quotes with the remote server
    Sync {
        /// Keep syncing on the configured interval until interrupted
        #[arg(long)]
        watch: bool,
    },
    /// Interactive session with periodic background sync
    Shell,
    /// Manage session-scoped state
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = commands::Context::open(cli.data_dir.as_deref())
        .and_then(|ctx| run(&ctx, cli.command));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(ctx: &commands::Context, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Status => commands::quotes::status(ctx),
        Commands::Show => commands::quotes::show(ctx),
        Commands::Add { text, category } => commands::quotes::add(ctx, &text, &category),
        Commands::List { all, json } => commands::quotes::list(ctx, all, json),
        Commands::Categories => commands::quotes::categories(ctx),
        Commands::Filter { category } => commands::quotes::filter(ctx, &category),
        Commands::Export { output } => commands::transfer::export(ctx, &output),
        Commands::Import { file, replace } => commands::transfer::import(ctx, &file, replace),
        Commands::Sync { watch } => commands::sync::execute(ctx, watch),
        Commands::Shell => commands::shell::execute(ctx),
        Commands::Session { action } => commands::session::execute(ctx, action),
    }
}
