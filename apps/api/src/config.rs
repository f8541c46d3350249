use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound for a single candidate summary call.
    pub summary_timeout_secs: u64,
    /// When false, `/match` does not write a `match_requests` row.
    pub record_match_requests: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10)?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            summary_timeout_secs: parse_env("SUMMARY_TIMEOUT_SECS", 20)?,
            record_match_requests: parse_env("RECORD_MATCH_REQUESTS", true)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u64 = parse_env("TALENT_API_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("TALENT_API_TEST_BAD_PORT", "not-a-port");
        let result: Result<u16> = parse_env("TALENT_API_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_env_reads_bool() {
        std::env::set_var("TALENT_API_TEST_RECORD", "false");
        let value: bool = parse_env("TALENT_API_TEST_RECORD", true).unwrap();
        assert!(!value);
    }
}
