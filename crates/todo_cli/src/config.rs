//! Command-line and environment configuration for `todo serve`.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Args;
use todo_core::{default_log_level, LogSink};

const MEMORY_DB: &str = ":memory:";

/// Start the HTTP server.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Interface to listen on.
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    pub host: String,
    /// TCP port to listen on (0 picks a free port).
    #[arg(long, env = "TODO_PORT", default_value = "5000")]
    pub port: u16,
    /// SQLite database file, or `:memory:` for a throwaway store.
    #[arg(long, env = "TODO_DB", default_value = MEMORY_DB)]
    pub db: String,
    /// Insert the default lists ("List 1", "List 2") when missing.
    #[arg(long, env = "TODO_SEED")]
    pub seed: bool,
    /// Log level: trace|debug|info|warn|error (defaults by build mode).
    #[arg(long, env = "TODO_LOG_LEVEL")]
    pub log_level: Option<String>,
    /// Absolute directory for rotated log files (stderr when unset).
    #[arg(long, env = "TODO_LOG_DIR")]
    pub log_dir: Option<String>,
}

/// Storage selected for the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbTarget {
    Memory,
    File(PathBuf),
}

/// Validated server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub addr: SocketAddr,
    pub db: DbTarget,
    pub seed: bool,
    pub log_level: String,
    pub log_sink: LogSink,
}

impl TryFrom<ServeArgs> for ServeConfig {
    type Error = anyhow::Error;

    fn try_from(args: ServeArgs) -> Result<Self, Self::Error> {
        let ip: IpAddr = args
            .host
            .trim()
            .parse()
            .with_context(|| format!("invalid --host `{}`", args.host))?;

        let db = match args.db.trim() {
            "" => return Err(anyhow!("--db cannot be empty")),
            MEMORY_DB => DbTarget::Memory,
            path => DbTarget::File(PathBuf::from(path)),
        };

        let log_sink = LogSink::from_dir_arg(args.log_dir.as_deref()).map_err(|e| anyhow!(e))?;

        Ok(Self {
            addr: SocketAddr::new(ip, args.port),
            db,
            seed: args.seed,
            log_level: args
                .log_level
                .unwrap_or_else(|| default_log_level().to_string()),
            log_sink,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ServeArgs {
        ServeArgs {
            host: "127.0.0.1".into(),
            port: 5000,
            db: MEMORY_DB.into(),
            seed: false,
            log_level: None,
            log_dir: None,
        }
    }

    #[test]
    fn defaults_resolve_to_memory_store_on_loopback() {
        let config = ServeConfig::try_from(args()).expect("config");
        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 5000)));
        assert_eq!(config.db, DbTarget::Memory);
        assert_eq!(config.log_sink, LogSink::Stderr);
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn file_path_selects_file_store() {
        let config = ServeConfig::try_from(ServeArgs {
            db: "/tmp/todo.db".into(),
            ..args()
        })
        .expect("config");
        assert_eq!(config.db, DbTarget::File(PathBuf::from("/tmp/todo.db")));
    }

    #[test]
    fn invalid_host_is_rejected() {
        let err = ServeConfig::try_from(ServeArgs {
            host: "not-an-ip".into(),
            ..args()
        })
        .unwrap_err();
        assert!(err.to_string().contains("--host"));
    }

    #[test]
    fn relative_log_dir_is_rejected() {
        let err = ServeConfig::try_from(ServeArgs {
            log_dir: Some("logs".into()),
            ..args()
        })
        .unwrap_err();
        assert!(err.to_string().contains("absolute"));
    }

    #[test]
    fn empty_db_is_rejected() {
        assert!(ServeConfig::try_from(ServeArgs {
            db: " ".into(),
            ..args()
        })
        .is_err());
    }
}
