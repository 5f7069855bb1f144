// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use log::LevelFilter;

// Configuration for the generator and vault server
#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub vault_file: PathBuf,

    // Password Generation
    pub default_password_length: usize,
    pub max_password_length: usize,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Storage
            vault_file: PathBuf::from("./vault.json"),

            // Password Generation
            default_password_length: 12,
            max_password_length: 256,

            // Web Interface
            web_port: 4000,
            web_address: "0.0.0.0".to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Values that fail to
    /// parse keep their default and are reported in the returned warnings,
    /// since the logger is configured from this result and is not running yet.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Storage
        if let Some(path) = lookup("VAULT_FILE") {
            if !path.trim().is_empty() {
                config.vault_file = PathBuf::from(path);
            }
        }

        // Password Generation
        parse_into(&lookup, "DEFAULT_PASSWORD_LENGTH", &mut config.default_password_length, &mut warnings);
        parse_into(&lookup, "MAX_PASSWORD_LENGTH", &mut config.max_password_length, &mut warnings);

        // Web Interface
        parse_into(&lookup, "PORT", &mut config.web_port, &mut warnings);
        parse_into(&lookup, "WEB_PORT", &mut config.web_port, &mut warnings);

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!(
                    "Unknown LOG_LEVEL '{}', using {}",
                    level, config.log_level
                )),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        if config.default_password_length > config.max_password_length {
            warnings.push(format!(
                "DEFAULT_PASSWORD_LENGTH {} exceeds MAX_PASSWORD_LENGTH {}, clamping",
                config.default_password_length, config.max_password_length
            ));
            config.default_password_length = config.max_password_length;
        }

        (config, warnings)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_address.clone(), self.web_port)
    }
}

fn parse_into<F, T>(lookup: &F, key: &str, target: &mut T, warnings: &mut Vec<String>)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(val) = lookup(key) {
        match val.trim().parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => warnings.push(format!("Ignoring invalid value '{}' for {}", val, key)),
        }
    }
}
