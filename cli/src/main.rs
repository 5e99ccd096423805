// SPDX-FileCopyrightText: 2026 GuildEvents contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line client for browsing the Guild's society events.

mod config;
mod event_formatter;

use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use guildevents_core::{APP_NAME, GuildEvents};

use crate::config::parse_config;
use crate::event_formatter::EventFormatter;

#[derive(Debug, Parser)]
#[command(name = APP_NAME, version)]
#[command(about = "Browse university society events from a locally synced cache")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Synchronize the local cache with the feed
    Sync,

    /// List upcoming events
    Events {
        /// Only show events hosted by this organiser id
        #[arg(short, long, value_name = "ID")]
        organiser: Option<i64>,
    },

    /// List the organisations that host events
    Organisations,

    /// Show full details for one event
    Show {
        /// Event id, as printed by `events`
        id: i64,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        println!("{} {e}", "Error:".red());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = parse_config(cli.config).await?;
    let app = GuildEvents::new(config).await?;

    let mut out = io::stdout();
    match cli.command.unwrap_or(Commands::Events { organiser: None }) {
        Commands::Sync => match app.refresh().await? {
            Some(updated) => println!("Synchronized; feed last changed {updated}"),
            None => println!("Could not reach the feed; keeping cached data"),
        },

        Commands::Events { organiser } => {
            // opening the list refreshes quietly first, the way the mobile
            // app did on every screen view; offline is fine
            app.refresh().await?;

            let events = match organiser {
                Some(id) => app.events_organised_by(id).await?,
                None => app.upcoming_events().await?,
            };
            EventFormatter::write_list(&mut out, &events)?;
        }

        Commands::Organisations => {
            app.refresh().await?;

            for organisation in app.organisations().await? {
                println!("#{:<4} {}", organisation.id, organisation.name);
            }
        }

        Commands::Show { id } => match app.get_event(id).await? {
            Some(event) => EventFormatter::write_detail(&mut out, &event)?,
            None => return Err(format!("No event with id {id}").into()),
        },
    }

    app.close().await
}
