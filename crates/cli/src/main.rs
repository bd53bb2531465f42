//! AdamFTD CLI - trade search box from the terminal
//!
//! This binary drives the search surface: quick actions, dispatch rules and a
//! live typeahead session backed by the configured suggestion provider.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use adamftd::repl::{ReplCommand, ReplHelp};
use adamftd::{format_action, format_suggestions, load_config, settle, PrintNavigator};

use adamftd_core::{Config, Role, Suggestion, SuggestionKind, UserProfile};
use adamftd_dispatch::{ActionCatalog, DispatchRouter};
use adamftd_suggestions::create_suggestion_provider;
use adamftd_typeahead::{SessionHandle, TypeaheadSession};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "adamftd")]
#[command(about = "Trade intelligence search box")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the quick actions for a role
    Actions {
        /// User role; unknown roles fall back to exporter
        #[arg(long, default_value = "exporter")]
        role: String,
    },
    /// Print where a suggestion leads
    Resolve {
        /// Suggestion kind: company, hs_code, country, product or recent
        #[arg(long)]
        kind: SuggestionKind,
        /// Suggestion value, e.g. an HS code or company id
        #[arg(long)]
        value: String,
        /// Display label (defaults to the value)
        #[arg(long)]
        label: Option<String>,
    },
    /// Print where a raw query search leads
    Search {
        /// Query text
        query: Vec<String>,
    },
    /// Show suggestions for a query
    Suggest {
        /// Query text
        query: Vec<String>,
    },
    /// Interactive search box
    Repl {
        #[arg(long, default_value = "Maria")]
        name: String,
        #[arg(long, default_value = "exporter")]
        role: String,
        #[arg(long, default_value = "PRO")]
        tier: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;

    match cli.command {
        Some(Commands::Actions { role }) => {
            print_actions(Role::parse_lenient(&role));
            Ok(())
        }
        Some(Commands::Resolve { kind, value, label }) => {
            let label = label.unwrap_or_else(|| value.clone());
            let suggestion = Suggestion::new(kind, value, label)?;
            println!("{}", DispatchRouter::resolve(&suggestion));
            Ok(())
        }
        Some(Commands::Search { query }) => {
            match DispatchRouter::resolve_query(&query.join(" ")) {
                Some(target) => println!("{target}"),
                None => debug!("Blank query, nothing to search"),
            }
            Ok(())
        }
        Some(Commands::Suggest { query }) => {
            let config = load_config(cli.config.as_deref())?;
            suggest(&config, &query.join(" ")).await
        }
        Some(Commands::Repl { name, role, tier }) => {
            let profile = UserProfile::new(name, &role, tier);
            repl(cli.config.as_deref(), profile).await
        }
        None => {
            println!("Run 'adamftd repl' for an interactive search box, or --help for more options");
            Ok(())
        }
    }
}

/// Initialize logging system
fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "{}={level},adamftd_core={level},adamftd_dispatch={level},adamftd_suggestions={level},adamftd_typeahead={level}",
            env!("CARGO_PKG_NAME")
        ))
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn print_actions(role: Role) {
    for action in ActionCatalog::global().actions_for_role(role) {
        println!("{}", format_action(action));
    }
}

fn start_session(config: &Config) -> Result<SessionHandle> {
    let provider = create_suggestion_provider(&config.suggestions)
        .context("Failed to create suggestion provider")?;
    Ok(TypeaheadSession::spawn(
        config.typeahead.clone(),
        provider,
        Arc::new(PrintNavigator),
    ))
}

async fn suggest(config: &Config, query: &str) -> Result<()> {
    let mut handle = start_session(config)?;
    handle.focus().await?;
    handle.set_query(query).await?;

    let state = settle(&mut handle, &config.typeahead).await?;
    if state.suggestions.is_empty() {
        println!("No suggestions");
    }
    for line in format_suggestions(&state.suggestions) {
        println!("{line}");
    }

    handle.shutdown().await?;
    Ok(())
}

async fn repl(config_path: Option<&Path>, profile: UserProfile) -> Result<()> {
    let config = load_config(config_path)?;
    let mut handle = start_session(&config)?;
    handle.focus().await?;

    println!(
        "Welcome back, {} ({}, {})",
        profile.name, profile.role, profile.tier
    );
    print_actions(profile.role);
    println!("{ReplHelp}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };
        let command = match ReplCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                warn!("{e}");
                continue;
            }
        };

        match command {
            ReplCommand::Query(text) => {
                handle.set_query(text).await?;
                let state = settle(&mut handle, &config.typeahead).await?;
                if state.suggestions_visible {
                    for line in format_suggestions(&state.suggestions) {
                        println!("{line}");
                    }
                }
            }
            ReplCommand::Submit => handle.submit().await?,
            ReplCommand::Select(position) => {
                handle.select_index(position.saturating_sub(1)).await?
            }
            ReplCommand::Focus => handle.focus().await?,
            ReplCommand::Blur => handle.blur().await?,
            ReplCommand::Clear => handle.clear().await?,
            ReplCommand::Actions => print_actions(profile.role),
            ReplCommand::Help => println!("{ReplHelp}"),
            ReplCommand::Quit => break,
        }
    }

    handle.shutdown().await?;
    Ok(())
}
