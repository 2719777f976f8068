use anyhow::{Context, Result, bail};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Which of the three services this process serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceVariant {
    Hello,
    Memory,
    Sqlite,
}

impl ServiceVariant {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hello" => Ok(ServiceVariant::Hello),
            "memory" => Ok(ServiceVariant::Memory),
            "sqlite" => Ok(ServiceVariant::Sqlite),
            other => bail!(
                "SERVICE_VARIANT must be one of: hello, memory, sqlite, got '{}'",
                other
            ),
        }
    }
}

impl fmt::Display for ServiceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceVariant::Hello => "hello",
            ServiceVariant::Memory => "memory",
            ServiceVariant::Sqlite => "sqlite",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub variant: ServiceVariant,
    pub database_path: PathBuf,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let variant = match lookup("SERVICE_VARIANT") {
            Some(value) => ServiceVariant::parse(&value)?,
            None => ServiceVariant::Sqlite,
        };

        let database_path = lookup("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("todo.sqlite"));

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        Ok(Config {
            variant,
            database_path,
            service_port,
            service_host,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service variant: {}", self.variant);
        if self.variant == ServiceVariant::Sqlite {
            tracing::info!("  Database path: {}", self.database_path.display());
        }
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_with_all_vars() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVICE_VARIANT", "memory"),
            ("DATABASE_PATH", "/tmp/other.sqlite"),
            ("SERVICE_PORT", "8080"),
            ("SERVICE_HOST", "0.0.0.0"),
        ]))
        .unwrap();

        assert_eq!(config.variant, ServiceVariant::Memory);
        assert_eq!(config.database_path, PathBuf::from("/tmp/other.sqlite"));
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_config_with_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.variant, ServiceVariant::Sqlite);
        assert_eq!(config.database_path, PathBuf::from("todo.sqlite"));
        assert_eq!(config.service_port, 8000);
        assert_eq!(config.service_host, "127.0.0.1");
    }

    #[test]
    fn test_variant_is_case_insensitive() {
        let config = Config::from_lookup(lookup_from(&[("SERVICE_VARIANT", " Hello ")])).unwrap();
        assert_eq!(config.variant, ServiceVariant::Hello);
    }

    #[test]
    fn test_unknown_variant() {
        let result = Config::from_lookup(lookup_from(&[("SERVICE_VARIANT", "postgres")]));
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_VARIANT"));
        assert!(error.to_string().contains("postgres"));
    }

    #[test]
    fn test_invalid_port() {
        let result = Config::from_lookup(lookup_from(&[("SERVICE_PORT", "not-a-number")]));
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let result = Config::from_lookup(lookup_from(&[("SERVICE_PORT", "99999")]));
        assert!(result.is_err());
    }
}
