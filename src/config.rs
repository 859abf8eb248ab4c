use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("Invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Which row store the server reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Sheets(SheetsConfig),
    Postgres { database_url: String },
    Memory { seed: Option<PathBuf> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    pub sheet_name: String,
    pub access_token: String,
    pub api_base: String,
    pub header_rows: usize,
}

/// Startup configuration. Loaded once in `main` and handed to handlers
/// through `web::Data`, never read from the environment afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub backend: Backend,
    pub admin_username: String,
    pub admin_password: String,
    pub token_ttl_hours: i64,
}

impl Config {
    /// Load from the process environment. `main` reads `.env` beforehand.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let backend = match get("STORE_BACKEND").as_deref().unwrap_or("memory") {
            "sheets" => Backend::Sheets(SheetsConfig {
                spreadsheet_id: get("SPREADSHEET_ID").ok_or(ConfigError::Missing("SPREADSHEET_ID"))?,
                sheet_name: get("SHEET_NAME").unwrap_or_else(|| "Sheet1".to_string()),
                access_token: get("SHEETS_ACCESS_TOKEN")
                    .ok_or(ConfigError::Missing("SHEETS_ACCESS_TOKEN"))?,
                api_base: get("SHEETS_API_BASE")
                    .unwrap_or_else(|| "https://sheets.googleapis.com".to_string()),
                header_rows: parse_or("SHEET_HEADER_ROWS", get("SHEET_HEADER_ROWS"), 1)?,
            }),
            "postgres" => Backend::Postgres {
                database_url: get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            },
            "memory" => Backend::Memory {
                seed: get("MEMBERS_SEED").map(PathBuf::from),
            },
            other => {
                return Err(ConfigError::Invalid {
                    key: "STORE_BACKEND",
                    reason: format!("unknown backend '{other}' (expected sheets, postgres or memory)"),
                });
            }
        };

        let token_ttl_hours: i64 = parse_or("TOKEN_TTL_HOURS", get("TOKEN_TTL_HOURS"), 12)?;
        if token_ttl_hours <= 0 {
            return Err(ConfigError::Invalid {
                key: "TOKEN_TTL_HOURS",
                reason: "must be positive".to_string(),
            });
        }

        Ok(Config {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            backend,
            admin_username: get("ADMIN_USERNAME").unwrap_or_else(|| "admin".to_string()),
            admin_password: get("ADMIN_PASSWORD").ok_or(ConfigError::Missing("ADMIN_PASSWORD"))?,
            token_ttl_hours,
        })
    }
}

fn parse_or<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_to_memory_backend() {
        let config = load(&[("ADMIN_PASSWORD", "secret")]).unwrap();
        assert_eq!(config.backend, Backend::Memory { seed: None });
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.admin_username, "admin");
        assert_eq!(config.token_ttl_hours, 12);
    }

    #[test]
    fn admin_password_is_required() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("ADMIN_PASSWORD")));
    }

    #[test]
    fn sheets_backend_requires_spreadsheet_and_token() {
        let err = load(&[("ADMIN_PASSWORD", "x"), ("STORE_BACKEND", "sheets")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("SPREADSHEET_ID")));

        let config = load(&[
            ("ADMIN_PASSWORD", "x"),
            ("STORE_BACKEND", "sheets"),
            ("SPREADSHEET_ID", "abc"),
            ("SHEETS_ACCESS_TOKEN", "tok"),
            ("SHEET_HEADER_ROWS", "2"),
        ])
        .unwrap();
        match config.backend {
            Backend::Sheets(sheets) => {
                assert_eq!(sheets.spreadsheet_id, "abc");
                assert_eq!(sheets.sheet_name, "Sheet1");
                assert_eq!(sheets.header_rows, 2);
                assert_eq!(sheets.api_base, "https://sheets.googleapis.com");
            }
            other => panic!("unexpected backend {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_backend_and_bad_numbers() {
        let err = load(&[("ADMIN_PASSWORD", "x"), ("STORE_BACKEND", "excel")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "STORE_BACKEND", .. }));

        let err = load(&[("ADMIN_PASSWORD", "x"), ("TOKEN_TTL_HOURS", "soon")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "TOKEN_TTL_HOURS", .. }));

        let err = load(&[("ADMIN_PASSWORD", "x"), ("TOKEN_TTL_HOURS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "TOKEN_TTL_HOURS", .. }));
    }
}
