use anyhow::{anyhow, bail};
use jsonwebtoken::Algorithm;
use std::{env, net::SocketAddr, str::FromStr};

const DEFAULT_DB_PORT: &str = "5432";
const DEFAULT_JWT_SECRET: &str = "your_secret_key";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8001";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_algorithm: Algorithm,
    pub db_max_connections: u32,
    pub db_acquire_timeout_seconds: u64,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup so it can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL").filter(|v| !v.is_empty()) {
            Some(url) => url,
            None => database_url_from_parts(&lookup)?,
        };

        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string());

        let algorithm_name = lookup("JWT_ALGORITHM").unwrap_or_else(|| "HS256".to_string());
        let jwt_algorithm = Algorithm::from_str(&algorithm_name)
            .map_err(|_| anyhow!("Invalid JWT_ALGORITHM value: {}", algorithm_name))?;
        if !matches!(
            jwt_algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            bail!(
                "JWT_ALGORITHM must be an HMAC algorithm when using JWT_SECRET, got {}",
                algorithm_name
            );
        }

        let db_max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let db_acquire_timeout_seconds = lookup("DB_ACQUIRE_TIMEOUT_SECONDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let bind_value = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_value
            .parse()
            .map_err(|_| anyhow!("Invalid BIND_ADDR value: {}", bind_value))?;

        Ok(Config {
            database_url,
            jwt_secret,
            jwt_algorithm,
            db_max_connections,
            db_acquire_timeout_seconds,
            bind_addr,
        })
    }
}

fn database_url_from_parts<F>(lookup: &F) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |key: &str| lookup(key).filter(|v| !v.is_empty());
    let port = lookup("DB_PORT")
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_DB_PORT.to_string());

    match (
        required("DB_USER"),
        required("DB_PASSWORD"),
        required("DB_HOST"),
        required("DB_NAME"),
    ) {
        (Some(user), Some(password), Some(host), Some(name)) => Ok(format!(
            "postgres://{}:{}@{}:{}/{}",
            user, password, host, port, name
        )),
        _ => Err(anyhow!(
            "Missing required environment variables: set DATABASE_URL or DB_USER, DB_PASSWORD, DB_HOST and DB_NAME"
        )),
    }
}

pub fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<empty>".into();
    }
    let prefix = s.chars().take(4).collect::<String>();
    format!("{}*** (len={})", prefix, s.len())
}

/// Hides the password component of a connection URL before it is logged.
pub fn mask_database_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((credentials, host)) = rest.rsplit_once('@') else {
        return url.to_string();
    };
    match credentials.split_once(':') {
        Some((user, _)) => format!("{}://{}:***@{}", scheme, user, host),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn builds_database_url_from_parts() {
        let config = Config::from_lookup(lookup_from(&[
            ("DB_USER", "app"),
            ("DB_PASSWORD", "pw"),
            ("DB_HOST", "db.internal"),
            ("DB_NAME", "cards"),
        ]))
        .expect("config");

        assert_eq!(config.database_url, "postgres://app:pw@db.internal:5432/cards");
        assert_eq!(config.jwt_secret, DEFAULT_JWT_SECRET);
        assert_eq!(config.jwt_algorithm, Algorithm::HS256);
        assert_eq!(config.bind_addr.port(), 8001);
    }

    #[test]
    fn database_url_takes_precedence() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://u:p@localhost/x"),
            ("DB_USER", "ignored"),
            ("DB_PORT", "6543"),
        ]))
        .expect("config");
        assert_eq!(config.database_url, "postgres://u:p@localhost/x");
    }

    #[test]
    fn missing_database_settings_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("DB_USER", "app")])).unwrap_err();
        assert!(err.to_string().contains("Missing required environment variables"));
    }

    #[test]
    fn rejects_non_hmac_algorithm() {
        let err = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://u:p@localhost/x"),
            ("JWT_ALGORITHM", "RS256"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("HMAC"));

        assert!(Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://u:p@localhost/x"),
            ("JWT_ALGORITHM", "nope"),
        ]))
        .is_err());
    }

    #[test]
    fn masks_secrets_for_logging() {
        assert_eq!(mask_secret(""), "<empty>");
        assert_eq!(mask_secret("abcdefgh"), "abcd*** (len=8)");
        assert_eq!(
            mask_database_url("postgres://app:hunter2@db:5432/cards"),
            "postgres://app:***@db:5432/cards"
        );
        assert_eq!(mask_database_url("sqlite::memory:"), "sqlite::memory:");
    }
}
