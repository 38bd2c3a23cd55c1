//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub app: AppSettings,
    pub roster: RosterConfig,
    pub slack: SlackConfig,
    pub scan: ScanConfig,
    pub bot: BotConfig,
    pub presence: PresenceConfig,
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Roster source location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    pub path: PathBuf,
}

/// Slack transport configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackConfig {
    /// File holding the bot token
    pub token_file: PathBuf,
    pub api_base: String,
    /// Overrides the user id reported by `rtm.connect`
    pub bot_user_id: Option<String>,
}

/// Network scan command and retry policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub program: String,
    pub args: Vec<String>,
    pub max_attempts: u32,
    pub backoff_ms: u64,
}

impl ScanConfig {
    /// Delay between failed attempts, if any
    #[must_use]
    pub fn backoff(&self) -> Option<Duration> {
        (self.backoff_ms > 0).then(|| Duration::from_millis(self.backoff_ms))
    }

    /// The full command line, for logging
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Bot loop cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotConfig {
    pub tick_interval_ms: u64,
    /// Scans run once every this many ticks
    pub scan_every_ticks: u32,
}

impl BotConfig {
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Presence tracking parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceConfig {
    pub miss_threshold: u32,
}

// Default value functions
fn default_app_name() -> String {
    "occupancy-bot".to_string()
}

fn default_roster_path() -> PathBuf {
    PathBuf::from("total_hours.csv")
}

fn default_token_file() -> PathBuf {
    PathBuf::from("key.txt")
}

fn default_api_base() -> String {
    "https://slack.com/api".to_string()
}

fn default_scan_program() -> String {
    "sudo".to_string()
}

fn default_scan_args() -> Vec<String> {
    vec!["arp-scan".to_string(), "-l".to_string()]
}

fn default_max_attempts() -> u32 {
    20
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_scan_every_ticks() -> u32 {
    5
}

fn default_miss_threshold() -> u32 {
    occupancy_core::DEFAULT_MISS_THRESHOLD
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is set to a value that cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .as_deref()
                    .and_then(Environment::parse)
                    .unwrap_or_default(),
            },
            roster: RosterConfig {
                path: lookup("ROSTER_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(default_roster_path),
            },
            slack: SlackConfig {
                token_file: lookup("SLACK_TOKEN_FILE")
                    .map(PathBuf::from)
                    .unwrap_or_else(default_token_file),
                api_base: lookup("SLACK_API_BASE")
                    .map(|s| s.trim_end_matches('/').to_string())
                    .unwrap_or_else(default_api_base),
                bot_user_id: lookup("SLACK_BOT_USER_ID")
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty()),
            },
            scan: ScanConfig {
                program: lookup("SCAN_PROGRAM").unwrap_or_else(default_scan_program),
                args: lookup("SCAN_ARGS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|a| !a.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_else(default_scan_args),
                max_attempts: parse_var(&lookup, "SCAN_MAX_ATTEMPTS", default_max_attempts)?,
                backoff_ms: parse_var(&lookup, "SCAN_BACKOFF_MS", || 0)?,
            },
            bot: BotConfig {
                tick_interval_ms: parse_var(
                    &lookup,
                    "BOT_TICK_INTERVAL_MS",
                    default_tick_interval_ms,
                )?,
                scan_every_ticks: parse_var(
                    &lookup,
                    "BOT_SCAN_EVERY_TICKS",
                    default_scan_every_ticks,
                )?,
            },
            presence: PresenceConfig {
                miss_threshold: parse_var(
                    &lookup,
                    "PRESENCE_MISS_THRESHOLD",
                    default_miss_threshold,
                )?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.program.trim().is_empty() {
            return Err(ConfigError::InvalidValue("SCAN_PROGRAM", String::new()));
        }
        if self.scan.max_attempts == 0 {
            return Err(ConfigError::InvalidValue("SCAN_MAX_ATTEMPTS", "0".to_string()));
        }
        if self.bot.scan_every_ticks == 0 {
            return Err(ConfigError::InvalidValue("BOT_SCAN_EVERY_TICKS", "0".to_string()));
        }
        if self.bot.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue("BOT_TICK_INTERVAL_MS", "0".to_string()));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: fn() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default()),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
