//! # API Reference Harness CLI (`apiref`)
//!
//! Every command parses the documentation tree from scratch, builds the
//! knowledge base in memory, and then answers from it.
//!
//! ## Usage
//!
//! ```bash
//! apiref [--config ./apiref.toml] [--root DIR] <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `apiref search <query>` | Substring search over names, summaries and parameters |
//! | `apiref get <name>` | Full record for one API |
//! | `apiref list [category]` | All `category.name` entries |
//! | `apiref categories` | Record count per category |
//! | `apiref export` | Write the JSON snapshot |
//! | `apiref shell` | Interactive console |

use apiref_core::QueryEngine;
use apiref_harness::{config, export, get, ingest, list, logging, search, shell};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// API Reference Harness: query structured knowledge extracted from
/// Markdown API documentation.
#[derive(Parser)]
#[command(
    name = "apiref",
    about = "API Reference Harness: search and look up APIs documented in a Markdown tree",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Optional. When the file does not exist, built-in defaults are used.
    #[arg(long, global = true, default_value = "./apiref.toml")]
    config: PathBuf,

    /// Documentation root, overriding `[docs].root`.
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search API names, summaries and parameter names (case-insensitive).
    Search {
        query: String,

        /// Only search this category (e.g. `entities`).
        #[arg(long)]
        category: Option<String>,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show everything known about one API.
    Get {
        /// API name, with or without backticks. Case-insensitive.
        api_name: String,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// List APIs as `category.name`, in index order.
    List { category: Option<String> },

    /// Show every category with its record count.
    Categories,

    /// Write the knowledge base to a JSON snapshot.
    ///
    /// Overwrites the target file if it exists.
    Export {
        /// Output path, overriding `[snapshot].path`.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Start the interactive console.
    Shell,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::load_config_or_default(&cli.config)?;
    if let Some(root) = cli.root {
        cfg.docs.root = root;
    }
    logging::init_logging(&cfg.logging)?;

    let (kb, _report) = ingest::build_knowledge_base(&cfg)?;
    let engine = QueryEngine::new(&kb);

    match cli.command {
        Commands::Search {
            query,
            category,
            json,
        } => {
            search::run_search(&engine, &query, category.as_deref(), json)?;
        }
        Commands::Get {
            api_name,
            category,
            json,
        } => {
            get::run_get(&engine, &api_name, category.as_deref(), json)?;
        }
        Commands::List { category } => {
            list::run_list(&engine, category.as_deref())?;
        }
        Commands::Categories => {
            list::run_categories(&engine)?;
        }
        Commands::Export { output } => {
            let path = output.unwrap_or_else(|| cfg.snapshot.path.clone());
            export::run_export(&kb, &path)?;
        }
        Commands::Shell => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            let interactive = atty::is(atty::Stream::Stdin);
            shell::run_shell(&engine, stdin.lock(), &mut stdout, interactive)?;
        }
    }

    Ok(())
}
