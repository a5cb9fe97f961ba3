use dotenv::dotenv;
use std::env;

use super::AppError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 4000;

/// Process configuration, read from the environment.
/// A `.env` file in the working directory is loaded first if present.
///
/// | Variable       | Required | Default     |
/// |----------------|----------|-------------|
/// | `DATABASE_URL` | yes      |             |
/// | `JWT_SECRET`   | yes      |             |
/// | `HOST`         | no       | `127.0.0.1` |
/// | `PORT`         | no       | `4000`      |
/// | `BCRYPT_COST`  | no       | `12`        |
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: String,
    pub port: u16,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Result<Config, AppError> {
        dotenv().ok();

        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(AppError::MissingConfig("DATABASE_URL"))?;
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.is_empty())
            .ok_or(AppError::MissingConfig("JWT_SECRET"))?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|_| AppError::InvalidConfig("PORT"))?,
            None => DEFAULT_PORT,
        };
        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(cost) => cost
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|cost| (4..=31).contains(cost))
                .ok_or(AppError::InvalidConfig("BCRYPT_COST"))?,
            None => bcrypt::DEFAULT_COST,
        };

        Ok(Config {
            database_url,
            jwt_secret,
            host,
            port,
            bcrypt_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_in(&[
            ("DATABASE_URL", "blog.db"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "blog.db");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 4000);
        assert_eq!(config.bcrypt_cost, 12);
    }

    #[test]
    fn test_missing_required() {
        let err = Config::from_lookup(lookup_in(&[("JWT_SECRET", "secret")])).err().unwrap();
        assert!(matches!(err, AppError::MissingConfig("DATABASE_URL")));

        let err = Config::from_lookup(lookup_in(&[("DATABASE_URL", "blog.db"), ("JWT_SECRET", "")]))
            .err()
            .unwrap();
        assert!(matches!(err, AppError::MissingConfig("JWT_SECRET")));
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup_in(&[
            ("DATABASE_URL", "blog.db"),
            ("JWT_SECRET", "secret"),
            ("PORT", "http"),
        ]))
        .err()
        .unwrap();
        assert!(matches!(err, AppError::InvalidConfig("PORT")));

        let err = Config::from_lookup(lookup_in(&[
            ("DATABASE_URL", "blog.db"),
            ("JWT_SECRET", "secret"),
            ("BCRYPT_COST", "2"),
        ]))
        .err()
        .unwrap();
        assert!(matches!(err, AppError::InvalidConfig("BCRYPT_COST")));
    }
}
