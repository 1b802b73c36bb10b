use std::path::PathBuf;
use std::str::FromStr;

/// Which store serves the clothing catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClothingBackendKind {
    Mongo,
    Json,
}

impl FromStr for ClothingBackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(ClothingBackendKind::Mongo),
            "json" => Ok(ClothingBackendKind::Json),
            other => Err(format!("unknown clothing backend '{other}' (expected 'mongo' or 'json')")),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{other}' (expected 'text' or 'json')")),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on draining in-flight requests after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    /// MongoDB connection string.
    pub mongodb_uri: String,
    /// Catalog database name.
    pub mongodb_database: String,
    pub clothing_backend: ClothingBackendKind,
    /// Path of the clothing JSON file, used when `clothing_backend` is `Json`.
    pub clothing_file: PathBuf,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                     |
    /// |-------------------------|-----------------------------|
    /// | `HOST`                  | `0.0.0.0`                   |
    /// | `PORT`                  | `3000`                      |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`     |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                        |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                        |
    /// | `MONGODB_URI`           | `mongodb://localhost:27017` |
    /// | `MONGODB_DATABASE`      | `Project`                   |
    /// | `CLOTHING_BACKEND`      | `mongo`                     |
    /// | `CLOTHING_FILE`         | `clothes.json`              |
    /// | `LOG_FORMAT`            | `text`                      |
    ///
    /// Panics on a value that does not parse, so misconfiguration fails at
    /// startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");

        let port: u16 = var("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = var("SHUTDOWN_TIMEOUT_SECS", "30")
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let mongodb_uri = var("MONGODB_URI", "mongodb://localhost:27017");
        let mongodb_database = var("MONGODB_DATABASE", "Project");

        let clothing_backend = var("CLOTHING_BACKEND", "mongo")
            .parse()
            .unwrap_or_else(|e| panic!("CLOTHING_BACKEND: {e}"));
        let clothing_file = PathBuf::from(var("CLOTHING_FILE", "clothes.json"));

        let log_format = var("LOG_FORMAT", "text")
            .parse()
            .unwrap_or_else(|e| panic!("LOG_FORMAT: {e}"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            mongodb_uri,
            mongodb_database,
            clothing_backend,
            clothing_file,
            log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_suit_local_development() {
        let config = config_from(&[]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.mongodb_uri, "mongodb://localhost:27017");
        assert_eq!(config.mongodb_database, "Project");
        assert_eq!(config.clothing_backend, ClothingBackendKind::Mongo);
        assert_eq!(config.clothing_file, PathBuf::from("clothes.json"));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("CLOTHING_BACKEND", "JSON"),
            ("CLOTHING_FILE", "/tmp/c.json"),
            ("LOG_FORMAT", "json"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.clothing_backend, ClothingBackendKind::Json);
        assert_eq!(config.clothing_file, PathBuf::from("/tmp/c.json"));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    #[should_panic(expected = "PORT must be a valid u16")]
    fn bad_port_fails_fast() {
        config_from(&[("PORT", "eighty")]);
    }

    #[test]
    #[should_panic(expected = "CLOTHING_BACKEND")]
    fn unknown_backend_fails_fast() {
        config_from(&[("CLOTHING_BACKEND", "xml")]);
    }
}
