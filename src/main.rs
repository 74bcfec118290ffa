//! json-inbox: local JSON debugging inbox
//!
//! Binds a local HTTP listener, pretty-prints every JSON POST it receives,
//! and registers the port with the Gitpod preview shortly after startup.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use json_inbox::{InboxConfig, InboxServer};

/// Receive JSON POSTs and pretty-print them to the console
#[derive(Parser)]
#[command(name = "json-inbox")]
#[command(about = "Local JSON inbox server", long_about = None)]
#[command(version)]
struct Cli {
    /// Port to listen on (all interfaces)
    #[arg(long, default_value_t = 36625)]
    port: u16,

    /// Seconds to wait before launching 'gp preview'
    #[arg(long, default_value_t = 5)]
    delay: u64,

    /// Do not launch 'gp preview' after startup
    #[arg(long)]
    no_preview: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("\n{}", "Starting JSON inbox server".bright_cyan().bold());
    println!("{}", "─────────────────────────────────".bright_cyan());
    println!(
        "  {} Server URL: {}",
        "→".blue(),
        format!("http://localhost:{}", cli.port).bright_green()
    );
    println!("  {} Press Ctrl+C to stop the server", "→".blue());
    println!();

    let config = InboxConfig {
        port: cli.port,
        preview_delay: Duration::from_secs(cli.delay),
        preview: !cli.no_preview,
    };

    InboxServer::start(config).await?;

    println!("\nServer stopped");
    Ok(())
}
