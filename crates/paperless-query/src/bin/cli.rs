//! Command-line front end for the query pipeline
//!
//! ```bash
//! # Show what a query is understood as
//! paperless-query parse "Rechnungen von Acme GmbH aus März 2023"
//!
//! # Ask the repository
//! paperless-query --config paperless.toml ask "Verträge vom 15.03.2023"
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use paperless_query::config::{QueryServiceConfig, CONFIG_PATH_ENV};
use paperless_query::nlp::{Annotator, RuleBasedAnnotator};
use paperless_query::types::ParseResponse;
use paperless_query::QueryPipeline;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "paperless-query")]
#[command(about = "Find Paperless documents with a natural-language query")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the extracted slots and repository filter as JSON
    Parse {
        /// Query text
        text: String,
    },

    /// Run the query against the repository and print the answer
    Ask {
        /// Query text
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present, before clap reads PAPERLESS_QUERY_CONFIG
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")?;

    let config = QueryServiceConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let annotator: Arc<dyn Annotator> =
        Arc::new(RuleBasedAnnotator::from_config(&config.annotator));

    match cli.command {
        Commands::Parse { text } => {
            let pipeline = QueryPipeline::from_config(&config, annotator)?;
            let (query, filter) = pipeline.parse(&text);
            let response = ParseResponse {
                query,
                filter: filter.to_wire_map(),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Ask { text } => {
            config.validate()?;
            let pipeline = QueryPipeline::from_config(&config, annotator)?;
            println!("{}", pipeline.answer(&text).await);
        }
    }

    Ok(())
}
