//! Kanban MCP Server - Main Entry Point
//!
//! This is the main entry point for the kanban MCP server application.
//! The actual implementation is in the `kanban_mcp` library.

use anyhow::Result;
use clap::Parser;
use kanban_mcp::KanbanServerHandler;
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Kanban MCP Server - drag-and-drop task board session via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with the board mounted on the kanban page (sample board if omitted)
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Page shown at startup: /, /dashboard, /calendar or /kanban
    #[arg(long, default_value = "/")]
    route: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP protocol, so logs go to stderr.
    // Use RUST_LOG=info or RUST_LOG=debug for verbose output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let handler = KanbanServerHandler::new(args.seed.as_deref(), &args.route)?;
    tracing::info!(route = %args.route, "serving kanban board over stdio");
    serve_stdio(handler).await?;
    Ok(())
}
