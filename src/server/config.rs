use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_JWT_EXPIRES_IN_DAYS: i64 = 7;
const DEFAULT_UPLOAD_DIR: &str = "uploads";

pub struct Config {
    pub database_url: String,
    pub port: u16,

    pub jwt_secret: String,
    pub jwt_expires_in_days: i64,

    pub upload_dir: String,

    /// Whether to mark the auth cookie `Secure`; enabled when APP_ENV=production.
    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            port: optional_parsed("PORT", DEFAULT_PORT)?,
            jwt_secret: require("JWT_SECRET")?,
            jwt_expires_in_days: optional_parsed(
                "JWT_EXPIRES_IN_DAYS",
                DEFAULT_JWT_EXPIRES_IN_DAYS,
            )?,
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
            secure_cookies: std::env::var("APP_ENV")
                .map(|env| env == "production")
                .unwrap_or(false),
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
