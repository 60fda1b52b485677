use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cmd::commands;

#[derive(Parser)]
#[command(author, version, about = "Portfolio static site generator", long_about = None)]
#[command(name = "folio")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Site directory containing site.yaml (falls back to FOLIO_DIR, then ".")
    #[arg(short, long, global = true)]
    dir: Option<PathBuf>,
    /// Enable verbose output, including per-project detail
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new site with example content
    Init,
    /// Build the site into the output directory
    Build {
        /// Output directory (defaults to the configured output path)
        output: Option<PathBuf>,
        /// Template variables for site.yaml expansion
        #[arg(long = "var", value_name = "KEY=VALUE")]
        var: Vec<String>,
    },
    /// Remove generated files from the output directory
    Clean {
        /// Output directory (defaults to the configured output path)
        output: Option<PathBuf>,
        /// Template variables for site.yaml expansion
        #[arg(long = "var", value_name = "KEY=VALUE")]
        var: Vec<String>,
    },
    /// List discovered projects without building
    List {
        /// Emit a JSON manifest instead of text
        #[arg(long)]
        json: bool,
        /// Template variables for site.yaml expansion
        #[arg(long = "var", value_name = "KEY=VALUE")]
        var: Vec<String>,
    },
}

fn main() -> Result<()> {
    diagnostics::init_diagnostics();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Init => commands::init_command(cli.dir.clone()),
        Commands::Build { output, var } => {
            commands::build_command(cli.dir.clone(), output.as_deref(), var, cli.verbose)
        }
        Commands::Clean { output, var } => {
            commands::clean_command(cli.dir.clone(), output.as_deref(), var)
        }
        Commands::List { json, var } => {
            commands::list_command(cli.dir.clone(), var, *json, cli.verbose)
        }
    }
}
