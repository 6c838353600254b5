use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub discover: DiscoverSettings,
    #[serde(default)]
    pub suggestions: SuggestionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Where the profile dataset comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataSettings {
    /// JSON or TOML file; the embedded seed is used when unset
    pub profiles_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_session_ttl")]
    pub ttl_secs: u64,
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_session_ttl(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_session_ttl() -> u64 { 3600 }
fn default_max_sessions() -> u64 { 10_000 }

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverSettings {
    /// Shown when a search matches no profiles
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
}

impl Default for DiscoverSettings {
    fn default() -> Self {
        Self {
            empty_message: default_empty_message(),
        }
    }
}

fn default_empty_message() -> String {
    "No profiles match your search criteria. Try adjusting your filters.".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionSettings {
    /// Fixed seed for reproducible sampling; entropy when unset
    pub seed: Option<u64>,
    #[serde(default = "default_suggested_count")]
    pub suggested_count: usize,
    #[serde(default = "default_viewed_count")]
    pub viewed_count: usize,
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
    #[serde(default = "default_conversation_count")]
    pub conversation_count: usize,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            seed: None,
            suggested_count: default_suggested_count(),
            viewed_count: default_viewed_count(),
            featured_count: default_featured_count(),
            conversation_count: default_conversation_count(),
        }
    }
}

fn default_suggested_count() -> usize { 3 }
fn default_viewed_count() -> usize { 2 }
fn default_featured_count() -> usize { 4 }
fn default_conversation_count() -> usize { 3 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

fn environment() -> Environment {
    // e.g., HEARTMATCH__SERVER__PORT -> server.port
    Environment::with_prefix("HEARTMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HEARTMATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}
