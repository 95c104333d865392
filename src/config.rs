//! Configuration Module
//!
//! Handles loading and validating cache and server configuration from
//! environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{CacheError, Result};
use crate::metadata::Namespace;

/// Capacity and lifetime of one namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamespaceConfig {
    /// Maximum number of entries
    pub capacity: usize,
    /// Lifetime of every entry
    pub ttl: Duration,
}

impl NamespaceConfig {
    pub const fn new(capacity: usize, ttl: Duration) -> Self {
        Self { capacity, ttl }
    }

    /// Built-in sizing for `namespace`.
    pub const fn default_for(namespace: Namespace) -> Self {
        match namespace {
            Namespace::FileType => Self::new(500, Duration::from_secs(10 * 60)),
            Namespace::FileStat => Self::new(200, Duration::from_secs(5 * 60)),
            Namespace::SyntaxConfig => Self::new(100, Duration::from_secs(15 * 60)),
            Namespace::OcrResult => Self::new(50, Duration::from_secs(30 * 60)),
        }
    }

    /// Rejects a zero capacity, a zero TTL, or a TTL too long to report in
    /// milliseconds.
    pub fn validate(&self, namespace: Namespace) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidConfig(format!(
                "{} capacity must be greater than zero",
                namespace
            )));
        }
        if self.ttl.is_zero() {
            return Err(CacheError::InvalidConfig(format!(
                "{} ttl must be greater than zero",
                namespace
            )));
        }
        if u64::try_from(self.ttl.as_millis()).is_err() {
            return Err(CacheError::InvalidConfig(format!(
                "{} ttl of {} seconds is too large",
                namespace,
                self.ttl.as_secs()
            )));
        }
        Ok(())
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with defaults
/// matching the built-in namespace table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file_type: NamespaceConfig,
    pub file_stat: NamespaceConfig,
    pub syntax_config: NamespaceConfig,
    pub ocr_result: NamespaceConfig,
    /// Diagnostics HTTP server port
    pub server_port: u16,
    /// Seconds between stats reports; 0 disables the reporter
    pub stats_report_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `<NS>_CACHE_CAPACITY` - entries per namespace
    /// - `<NS>_CACHE_TTL_SECS` - TTL per namespace in seconds
    ///
    ///   where `<NS>` is one of `FILE_TYPE`, `FILE_STAT`, `SYNTAX_CONFIG`,
    ///   `OCR_RESULT`
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `STATS_REPORT_INTERVAL` - reporter period in seconds (default: 60)
    ///
    /// A variable that is set but does not parse as a non-negative integer is
    /// an error, as is a zero capacity or TTL.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let namespace = |ns: Namespace| -> Result<NamespaceConfig> {
            let fallback = NamespaceConfig::default_for(ns);
            let capacity = parse_var(
                &lookup,
                &format!("{}_CACHE_CAPACITY", ns.env_prefix()),
                fallback.capacity,
            )?;
            let ttl_secs = parse_var(
                &lookup,
                &format!("{}_CACHE_TTL_SECS", ns.env_prefix()),
                fallback.ttl.as_secs(),
            )?;
            Ok(NamespaceConfig::new(capacity, Duration::from_secs(ttl_secs)))
        };

        let config = Self {
            file_type: namespace(Namespace::FileType)?,
            file_stat: namespace(Namespace::FileStat)?,
            syntax_config: namespace(Namespace::SyntaxConfig)?,
            ocr_result: namespace(Namespace::OcrResult)?,
            server_port: parse_var(&lookup, "SERVER_PORT", defaults.server_port)?,
            stats_report_interval: parse_var(
                &lookup,
                "STATS_REPORT_INTERVAL",
                defaults.stats_report_interval,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Returns the sizing of one namespace.
    pub fn namespace(&self, namespace: Namespace) -> NamespaceConfig {
        match namespace {
            Namespace::FileType => self.file_type,
            Namespace::FileStat => self.file_stat,
            Namespace::SyntaxConfig => self.syntax_config,
            Namespace::OcrResult => self.ocr_result,
        }
    }

    /// Checks every namespace configuration.
    pub fn validate(&self) -> Result<()> {
        Namespace::ALL
            .into_iter()
            .try_for_each(|ns| self.namespace(ns).validate(ns))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_type: NamespaceConfig::default_for(Namespace::FileType),
            file_stat: NamespaceConfig::default_for(Namespace::FileStat),
            syntax_config: NamespaceConfig::default_for(Namespace::SyntaxConfig),
            ocr_result: NamespaceConfig::default_for(Namespace::OcrResult),
            server_port: 3000,
            stats_report_interval: 60,
        }
    }
}

fn parse_var<T, F>(lookup: &F, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| {
            CacheError::InvalidConfig(format!(
                "{} must be a non-negative integer, got '{}'",
                name, raw
            ))
        }),
    }
}
