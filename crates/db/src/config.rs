//! Database connection settings, read from the environment.
//!
//! Variable names follow the deployment contract this service inherits:
//! `USER_NAME`, `HOST_NAME`, `DB_NAME`, `DB_PASSWORD`, `DB_DIALECT`,
//! `PORT_NUMBER`.

use sqlx::postgres::PgConnectOptions;
use tracing::warn;

use crate::ConfigError;

const DEFAULT_PORT: u16 = 5432;

/// Connection settings for the Postgres pool.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub user: String,
    pub host: String,
    pub database: String,
    pub password: String,
    /// Legacy dialect tag carried over from the deployment environment.
    /// Only `postgres` is supported; anything else is warned about and
    /// otherwise ignored.
    pub dialect: Option<String>,
    pub port: u16,
}

impl DbConfig {
    /// Build a config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Separated from [`DbConfig::from_env`] so tests don't have to mutate
    /// process-wide environment state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        fn required(
            lookup: &impl Fn(&str) -> Option<String>,
            var: &'static str,
        ) -> Result<String, ConfigError> {
            lookup(var).ok_or(ConfigError::MissingVar(var))
        }

        let port = match lookup("PORT_NUMBER") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                var: "PORT_NUMBER",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let dialect = lookup("DB_DIALECT");
        if let Some(tag) = dialect.as_deref() {
            if !tag.eq_ignore_ascii_case("postgres") {
                warn!(dialect = tag, "unsupported DB_DIALECT tag, using postgres");
            }
        }

        Ok(Self {
            user: required(&lookup, "USER_NAME")?,
            host: required(&lookup, "HOST_NAME")?,
            database: required(&lookup, "DB_NAME")?,
            password: required(&lookup, "DB_PASSWORD")?,
            dialect,
            port,
        })
    }

    /// Translate the config into sqlx connect options.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .username(&self.user)
            .host(&self.host)
            .database(&self.database)
            .password(&self.password)
            .port(self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_env() -> HashMap<String, String> {
        vars(&[
            ("USER_NAME", "app"),
            ("HOST_NAME", "db.internal"),
            ("DB_NAME", "crm"),
            ("DB_PASSWORD", "hunter2"),
            ("DB_DIALECT", "postgres"),
            ("PORT_NUMBER", "5433"),
        ])
    }

    #[test]
    fn reads_all_variables() {
        let env = full_env();
        let cfg = DbConfig::from_lookup(|v| env.get(v).cloned()).unwrap();

        assert_eq!(cfg.user, "app");
        assert_eq!(cfg.host, "db.internal");
        assert_eq!(cfg.database, "crm");
        assert_eq!(cfg.password, "hunter2");
        assert_eq!(cfg.dialect.as_deref(), Some("postgres"));
        assert_eq!(cfg.port, 5433);
    }

    #[test]
    fn port_and_dialect_are_optional() {
        let mut env = full_env();
        env.remove("PORT_NUMBER");
        env.remove("DB_DIALECT");

        let cfg = DbConfig::from_lookup(|v| env.get(v).cloned()).unwrap();
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.dialect, None);
    }

    #[test]
    fn missing_required_variable_is_an_error() {
        let mut env = full_env();
        env.remove("DB_PASSWORD");

        let err = DbConfig::from_lookup(|v| env.get(v).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DB_PASSWORD")));
    }

    #[test]
    fn unparseable_port_is_an_error() {
        let mut env = full_env();
        env.insert("PORT_NUMBER".into(), "fivethousand".into());

        let err = DbConfig::from_lookup(|v| env.get(v).cloned()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidVar {
                var: "PORT_NUMBER",
                ..
            }
        ));
    }

    #[test]
    fn foreign_dialect_tag_is_kept_but_not_fatal() {
        let mut env = full_env();
        env.insert("DB_DIALECT".into(), "mysql".into());

        let cfg = DbConfig::from_lookup(|v| env.get(v).cloned()).unwrap();
        assert_eq!(cfg.dialect.as_deref(), Some("mysql"));
    }
}
