use crate::core::models::common::Pagination;
use crate::error::Error;
use std::str::FromStr;

pub static DATABASE_URL: &str = "DATABASE_URL";
pub static BIND_HOST: &str = "BIND_HOST";
pub static BIND_PORT: &str = "BIND_PORT";
pub static DB_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";
pub static POLLS_INDEX_LIMIT: &str = "POLLS_INDEX_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Without a database URL the server keeps polls in memory.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub index_limit: Option<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            host: "0.0.0.0".into(),
            port: 8000,
            max_connections: 5,
            index_limit: None,
        }
    }
}

fn parse<T>(key: &str, value: Option<String>) -> Result<Option<T>, Error>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    match value.filter(|v| !v.trim().is_empty()) {
        Some(v) => v.trim().parse().map(Some).map_err(|e| {
            log::error!("invalid value {:?} for {}", v, key);
            Error::from(e)
        }),
        None => Ok(None),
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, Error> {
        if let Err(e) = dotenv::dotenv() {
            if !e.not_found() {
                return Err(e.into());
            }
        }
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let config = Self {
            database_url: lookup(DATABASE_URL).filter(|v| !v.trim().is_empty()),
            host: lookup(BIND_HOST).filter(|v| !v.trim().is_empty()).unwrap_or(default.host),
            port: parse(BIND_PORT, lookup(BIND_PORT))?.unwrap_or(default.port),
            max_connections: parse(DB_MAX_CONNECTIONS, lookup(DB_MAX_CONNECTIONS))?.unwrap_or(default.max_connections),
            index_limit: parse(POLLS_INDEX_LIMIT, lookup(POLLS_INDEX_LIMIT))?,
        };
        if config.max_connections == 0 {
            return Err(Error::ConfigError(format!("{} must be positive", DB_MAX_CONNECTIONS)));
        }
        if matches!(config.index_limit, Some(n) if n <= 0) {
            return Err(Error::ConfigError(format!("{} must be positive", POLLS_INDEX_LIMIT)));
        }
        Ok(config)
    }

    pub fn index_pagination(&self) -> Option<Pagination> {
        self.index_limit.map(|limit| Pagination::new(limit, None))
    }
}
