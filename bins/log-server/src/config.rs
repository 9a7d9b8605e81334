use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

use log_store::LogConfig;

use crate::error::ServerError;

#[derive(Parser)]
#[command(name = "log-server", about = "Append-only log over HTTP")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

#[derive(Args, Clone, Debug, Default)]
pub struct ServeArgs {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(long, env = "PROGLOG_CONFIG")]
    pub config: Option<String>,

    /// Listen address, overrides `listen` from the config file.
    #[arg(long, env = "PROGLOG_LISTEN")]
    pub listen: Option<String>,
}

// ---- TOML Config ----

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String,
    #[serde(default)]
    pub log: LogConfig,
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            log: LogConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn load(path: &str) -> Result<Self, ServerError> {
        let content = std::fs::read_to_string(path).map_err(|e| ServerError::Config {
            context: "read",
            detail: format!("'{path}': {e}"),
        })?;
        toml::from_str(&content).map_err(|e| ServerError::Config {
            context: "parse",
            detail: format!("'{path}': {e}"),
        })
    }

    pub fn parse(toml_str: &str) -> Result<Self, ServerError> {
        toml::from_str(toml_str).map_err(|e| ServerError::Config {
            context: "parse",
            detail: e.to_string(),
        })
    }

    /// Config file (if any) with command line overrides applied.
    pub fn resolve(args: &ServeArgs) -> Result<Self, ServerError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(listen) = &args.listen {
            config.listen = listen.clone();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = ServerConfig::parse("").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.listen, "0.0.0.0:8080");
        assert_eq!(config.log.max_records, None);
    }

    #[test]
    fn parses_all_fields() {
        let config = ServerConfig::parse(
            r#"
            listen = "127.0.0.1:9000"

            [log]
            max_records = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.listen, "127.0.0.1:9000");
        assert_eq!(config.log.max_records, Some(10));
    }

    #[test]
    fn bad_toml_is_config_error() {
        let err = ServerConfig::parse("listen = [").unwrap_err();
        assert!(matches!(err, ServerError::Config { context: "parse", .. }));
    }

    #[test]
    fn bad_file_error_names_the_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "listen = [").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        match ServerConfig::load(&path).unwrap_err() {
            ServerError::Config { context, detail } => {
                assert_eq!(context, "parse");
                assert!(detail.starts_with(&format!("'{path}': ")), "{detail}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = ServerConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ServerError::Config { context: "read", .. }));
    }

    #[test]
    fn cli_listen_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "listen = \"127.0.0.1:1234\"\n[log]\nmax_records = 5").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let from_file = ServerConfig::resolve(&ServeArgs {
            config: Some(path.clone()),
            listen: None,
        })
        .unwrap();
        assert_eq!(from_file.listen, "127.0.0.1:1234");

        let overridden = ServerConfig::resolve(&ServeArgs {
            config: Some(path),
            listen: Some("127.0.0.1:4321".into()),
        })
        .unwrap();
        assert_eq!(overridden.listen, "127.0.0.1:4321");
        assert_eq!(overridden.log.max_records, Some(5));
    }

    #[test]
    fn no_config_file_means_defaults() {
        let config = ServerConfig::resolve(&ServeArgs::default()).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn cli_parses_serve_flags() {
        let cli = Cli::try_parse_from(["log-server", "serve", "--listen", "127.0.0.1:9999"]).unwrap();
        let Commands::Serve(args) = cli.command;
        assert_eq!(args.listen.as_deref(), Some("127.0.0.1:9999"));
    }
}
