//! `todo serve` command.

use anyhow::{anyhow, Context};
use log::info;
use rusqlite::Connection;
use todo_core::db::{open_db, open_db_in_memory, seed_default_lists};
use todo_core::init_logging;
use todo_http::{AppState, HttpServer};

use crate::config::{DbTarget, ServeConfig};

/// Opens the store, then serves until Ctrl-C.
pub async fn execute(config: ServeConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level, config.log_sink.clone()).map_err(|e| anyhow!(e))?;

    let mut conn = open_store(&config.db)?;
    if config.seed {
        seed_default_lists(&mut conn).context("failed to seed default lists")?;
    }

    let server = HttpServer::bind(config.addr, AppState::new(conn)).await?;
    info!(
        "event=server_ready module=cli status=ok addr={}",
        server.local_addr()?
    );

    server
        .serve(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("event=shutdown_signal module=cli status=ok");
            }
        })
        .await?;
    Ok(())
}

fn open_store(target: &DbTarget) -> anyhow::Result<Connection> {
    match target {
        DbTarget::Memory => open_db_in_memory().context("failed to open in-memory database"),
        DbTarget::File(path) => open_db(path)
            .with_context(|| format!("failed to open database `{}`", path.display())),
    }
}
