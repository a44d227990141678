//! Server configuration, read once at startup from the environment (and a
//! `.env` file, loaded by `main`).

use std::path::PathBuf;
use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite connection string.
    pub database_url: String,
    /// Origins allowed by CORS.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    /// Root directory for uploaded files, served under `/uploads`.
    pub upload_dir: PathBuf,
    /// Directory holding the track import file.
    pub data_dir: PathBuf,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `DATABASE_URL`         | `sqlite://trackside.db`    |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `UPLOAD_DIR`           | `./uploads`                |
    /// | `DATA_DIR`             | `../trackside/data`        |
    ///
    /// See [`JwtConfig::from_env`] for the token settings.
    ///
    /// Panics if a numeric variable does not parse.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_parse("PORT", 8080),
            database_url: env_or("DATABASE_URL", "sqlite://trackside.db"),
            cors_origins: parse_origins(&env_or("CORS_ORIGINS", "http://localhost:3000")),
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", 30),
            upload_dir: PathBuf::from(env_or("UPLOAD_DIR", "./uploads")),
            data_dir: PathBuf::from(env_or("DATA_DIR", "../trackside/data")),
            jwt: JwtConfig::from_env(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse `key` when set, otherwise use `default`. Panics on a malformed value.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} is invalid ({raw:?}): {e}")),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_origins;

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            parse_origins(" http://localhost:3000 ,,https://trackside.app"),
            vec!["http://localhost:3000", "https://trackside.app"]
        );
    }
}
