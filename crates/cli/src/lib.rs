//! Command-line browse surface for score hierarchies.
//!
//! `tree` renders the expandable structure tree by querying only the
//! generic adapter contract; `show` selects one node by a dotted
//! child-index path and prints its detail dump through the selection
//! coordinator.

mod commands;
mod util;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use util::CliResult;

#[derive(Parser, Debug)]
#[command(
    name = "scorelens",
    version,
    about = "Browse an in-memory score hierarchy as an expandable tree"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the score hierarchy as a tree.
    Tree(commands::tree::TreeArgs),
    /// Show the detail dump of a single node.
    Show(commands::show::ShowArgs),
}

pub fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing();

    let output = match cli.command {
        Command::Tree(args) => commands::tree::run(&args)?,
        Command::Show(args) => commands::show::run(&args)?,
    };
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("SCORELENS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
