use crate::error::{Error, Result};
use chrono::Duration;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
const DEFAULT_MESSAGES_FILE: &str = "messages.json";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub messages_file: PathBuf,
    pub auth: AuthConfig,
}

/// Everything the admin gate needs. Passed to `AuthService::new` explicitly.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub admin_email: String,
    pub admin_password: String,
    pub token_ttl: Duration,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            messages_file: PathBuf::from(get_env_or("MESSAGES_FILE", DEFAULT_MESSAGES_FILE)),
            auth: AuthConfig {
                jwt_secret: get_env("JWT_SECRET")?,
                admin_email: get_env("ADMIN_EMAIL")?,
                admin_password: get_env("ADMIN_PASSWORD")?,
                token_ttl: token_ttl(get_env_parse_or(
                    "TOKEN_TTL_HOURS",
                    DEFAULT_TOKEN_TTL_HOURS,
                )?)?,
            },
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

fn token_ttl(hours: i64) -> Result<Duration> {
    Duration::try_hours(hours)
        .filter(|ttl| *ttl > Duration::zero())
        .filter(|ttl| chrono::Utc::now().checked_add_signed(*ttl).is_some())
        .ok_or_else(|| Error::Config(format!("Invalid value for TOKEN_TTL_HOURS: {}", hours)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}
