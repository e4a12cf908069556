//! wikirace CLI — races between Wikipedia articles, with an MCP server.
//!
//! Usage:
//!   wikirace race <start> <destination> [--pretty] [--config path]
//!   wikirace mcp [--transport stdio] [--config path]
//!   wikirace config [--config path]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use wikirace::{HttpLinkLookup, RaceApi, RaceConfig, RaceQuery};

#[derive(Parser)]
#[command(
    name = "wikirace",
    version,
    about = "Find link paths between Wikipedia articles"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to a YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Race from one article to another and print the result as JSON
    Race {
        /// Title of the starting article
        start: String,
        /// Title of the destination article
        destination: String,
        /// Pretty-print the JSON response
        #[arg(long)]
        pretty: bool,
    },
    /// Start the MCP (Model Context Protocol) server
    Mcp {
        /// Transport type (currently only stdio)
        #[arg(long, default_value = "stdio")]
        transport: String,
    },
    /// Print the effective configuration
    Config,
}

/// Log to stderr, filtered by WIKIRACE_LOG (default: info)
fn init_tracing() {
    let filter = EnvFilter::try_from_env("WIKIRACE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_race(config: &RaceConfig, start: String, destination: String, pretty: bool) -> i32 {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            return 1;
        }
    };
    let lookup = match HttpLinkLookup::new(config) {
        Ok(lookup) => Arc::new(lookup),
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let api = RaceApi::new(lookup, config);
    let response = rt.block_on(api.race(&RaceQuery::new(start, destination)));

    let rendered = if pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    };
    match rendered {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    }

    if response.completed {
        0
    } else {
        1
    }
}

fn cmd_config(config: &RaceConfig) -> i32 {
    match config.to_yaml() {
        Ok(yaml) => {
            print!("{}", yaml);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let config = match RaceConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Race {
            start,
            destination,
            pretty,
        } => cmd_race(&config, start, destination, pretty),
        Commands::Mcp { transport } => {
            if transport != "stdio" {
                eprintln!("error: only 'stdio' transport is currently supported");
                std::process::exit(1);
            }
            wikirace::mcp::run_mcp_server(config)
        }
        Commands::Config => cmd_config(&config),
    };
    std::process::exit(code);
}
