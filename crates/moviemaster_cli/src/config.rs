//! Server configuration.
//!
//! # Responsibility
//! - Parse command-line flags.
//! - Fill unset flags from `MOVIEMASTER_*` environment variables, then defaults.
//!
//! # Invariants
//! - An explicit flag always wins over the environment.
//! - An environment value that cannot be used is an error, never silently
//!   replaced by the default.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use clap::Parser;
use moviemaster_core::logging::normalize_level;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_SEED: &str = "Movies.json";

pub const ENV_PORT: &str = "MOVIEMASTER_PORT";
pub const ENV_SEED: &str = "MOVIEMASTER_SEED";
pub const ENV_LOG_LEVEL: &str = "MOVIEMASTER_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "MOVIEMASTER_LOG_DIR";

/// In-memory movie catalogue served over HTTP.
#[derive(Debug, Default, Parser)]
#[command(name = "moviemaster", version, about = "In-memory movie catalogue served over HTTP")]
pub struct Args {
    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,
    /// Port to listen on [default: 5000]
    #[arg(long)]
    pub port: Option<u16>,
    /// Path to the seed JSON file [default: Movies.json]
    #[arg(long)]
    pub seed: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
    /// Directory for rotating log files; logs go to stderr when unset
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

/// Fully resolved startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub seed: PathBuf,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable is set but its value is unusable.
    InvalidEnv {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEnv {
                name,
                value,
                reason,
            } => write!(f, "invalid {name}='{value}': {reason}"),
        }
    }
}

impl Error for ConfigError {}

impl ServerConfig {
    /// Merges `args` with the environment as seen through `env`.
    pub fn resolve<F>(args: Args, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match args.port {
            Some(port) => port,
            None => match non_blank(&env, ENV_PORT) {
                Some(raw) => raw.parse::<u16>().map_err(|err| ConfigError::InvalidEnv {
                    name: ENV_PORT,
                    value: raw.clone(),
                    reason: err.to_string(),
                })?,
                None => DEFAULT_PORT,
            },
        };

        let seed = args
            .seed
            .or_else(|| non_blank(&env, ENV_SEED).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED));

        let log_level = match args.log_level {
            Some(level) => level,
            None => match non_blank(&env, ENV_LOG_LEVEL) {
                Some(raw) => normalize_level(&raw)
                    .map_err(|reason| ConfigError::InvalidEnv {
                        name: ENV_LOG_LEVEL,
                        value: raw.clone(),
                        reason,
                    })?
                    .to_string(),
                None => moviemaster_core::default_log_level().to_string(),
            },
        };

        let log_dir = args
            .log_dir
            .or_else(|| non_blank(&env, ENV_LOG_DIR).map(PathBuf::from));

        Ok(Self {
            host: args.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            seed,
            log_level,
            log_dir,
        })
    }
}

fn non_blank<F>(env: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    env(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ServerConfig::resolve(Args::default(), env_of(&[])).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, 5000);
        assert_eq!(config.seed, PathBuf::from("Movies.json"));
        assert_eq!(config.log_level, moviemaster_core::default_log_level());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn environment_fills_unset_flags() {
        let env = env_of(&[
            (ENV_PORT, "8081"),
            (ENV_SEED, "/data/movies.json"),
            (ENV_LOG_LEVEL, "Warning"),
            (ENV_LOG_DIR, "/var/log/moviemaster"),
        ]);
        let config = ServerConfig::resolve(Args::default(), env).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.seed, PathBuf::from("/data/movies.json"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/moviemaster")));
    }

    #[test]
    fn flags_win_over_environment() {
        let args = Args {
            port: Some(9000),
            seed: Some(PathBuf::from("local.json")),
            ..Args::default()
        };
        let env = env_of(&[(ENV_PORT, "8081"), (ENV_SEED, "/data/movies.json")]);
        let config = ServerConfig::resolve(args, env).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.seed, PathBuf::from("local.json"));
    }

    #[test]
    fn flag_wins_even_when_env_is_invalid() {
        let args = Args {
            port: Some(9000),
            ..Args::default()
        };
        let config = ServerConfig::resolve(args, env_of(&[(ENV_PORT, "nope")])).unwrap();
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn invalid_env_port_is_rejected() {
        let err = ServerConfig::resolve(Args::default(), env_of(&[(ENV_PORT, "70000")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv { name: ENV_PORT, .. }
        ));
        assert!(err.to_string().contains("70000"));
    }

    #[test]
    fn invalid_env_log_level_is_rejected() {
        let err = ServerConfig::resolve(Args::default(), env_of(&[(ENV_LOG_LEVEL, "loud")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv {
                name: ENV_LOG_LEVEL,
                ..
            }
        ));
    }

    #[test]
    fn blank_env_values_fall_back_to_defaults() {
        let env = env_of(&[(ENV_PORT, "  "), (ENV_LOG_DIR, "")]);
        let config = ServerConfig::resolve(Args::default(), env).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn parses_command_line_flags() {
        let args = Args::parse_from([
            "moviemaster",
            "--host",
            "127.0.0.1",
            "--port",
            "6000",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(6000));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.seed.is_none());
    }
}
