//! Command-line interface.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use comfy_table::Table;

use crate::domain::models::Config;
use crate::domain::ports::{AgentRepository, PropertyRepository};
use crate::http::run_server;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::database::{
    ConnectionManager, SqliteAgentRepository, SqlitePropertyRepository,
};
use crate::infrastructure::fallback::{ResilientAgentRepository, ResilientPropertyRepository};

#[derive(Parser, Debug)]
#[command(name = "hearth", version, about = "Real-estate listings data service")]
pub struct Cli {
    /// Path to a configuration file (overrides the default search)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),

    /// Show store connectivity and dataset counts
    Status,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Bind address (overrides configuration)
    #[arg(long)]
    pub bind: Option<String>,

    /// Listen port (overrides configuration)
    #[arg(long)]
    pub port: Option<u16>,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// `hearth serve`
pub async fn serve(config_path: Option<&PathBuf>, args: &ServeArgs) -> Result<()> {
    let mut config = load_config(config_path)?;

    if let Some(bind) = &args.bind {
        config.http.bind.clone_from(bind);
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    run_server(config).await
}

/// `hearth status`
///
/// Prints store reachability plus property/agent counts, flagging whether the
/// counts come from the live store or the fallback dataset.
pub async fn status(config_path: Option<&PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;
    let manager = Arc::new(ConnectionManager::new(config.database.clone()));

    let source = match manager.ping().await {
        Ok(()) => "live",
        Err(_) => "fallback",
    };

    let properties =
        ResilientPropertyRepository::new(SqlitePropertyRepository::new(manager.clone()));
    let agents = ResilientAgentRepository::new(SqliteAgentRepository::new(manager.clone()));

    let property_count = properties.list().await?.len();
    let recent = properties.list_recent(3).await?;
    let agent_count = agents.list().await?.len();

    let mut table = Table::new();
    table.set_header(vec!["item", "value", "source"]);
    table.add_row(vec![
        "store".to_string(),
        config
            .database
            .server
            .clone()
            .unwrap_or_else(|| "(not configured)".to_string()),
        if source == "live" {
            "connected".to_string()
        } else {
            "unavailable".to_string()
        },
    ]);
    table.add_row(vec![
        "properties".to_string(),
        property_count.to_string(),
        source.to_string(),
    ]);
    table.add_row(vec![
        "agents".to_string(),
        agent_count.to_string(),
        source.to_string(),
    ]);
    for property in recent {
        table.add_row(vec![
            "recent listing".to_string(),
            format!(
                "#{} {} in {}",
                property.id, property.property_type, property.location
            ),
            source.to_string(),
        ]);
    }

    println!("{table}");

    manager.close().await;
    Ok(())
}
