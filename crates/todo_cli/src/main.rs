//! `todo` binary: runs the todo list HTTP API.

use clap::{Parser, Subcommand};

mod config;
mod serve;

/// Todo list HTTP API backed by SQLite.
#[derive(Debug, Parser)]
#[command(name = "todo", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP server.
    Serve(config::ServeArgs),
    /// Print the core library version.
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::execute(args.try_into()?).await,
        Commands::Version => {
            println!("todo_core version={}", todo_core::core_version());
            Ok(())
        }
    }
}
