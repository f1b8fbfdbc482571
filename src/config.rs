use std::env;
use std::str::FromStr;

/// Which `OrderStore` implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!(
                "unknown store backend '{other}', expected 'postgres' or 'memory'"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// `DATABASE_URL` wins when set; otherwise the connection string is
    /// composed from the discrete `DB_*` parameters.
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
            let user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
            let password = env::var("DB_PASSWORD").unwrap_or_else(|_| "postgres".to_string());
            let name = env::var("DB_NAME").unwrap_or_else(|_| "pedidos".to_string());
            format!("postgres://{user}:{password}@{host}:{port}/{name}")
        });

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .expect("PORT must be a valid number");
        let store: StoreBackend = env::var("ORDER_STORE")
            .unwrap_or_else(|_| "postgres".to_string())
            .parse()
            .expect("ORDER_STORE must be 'postgres' or 'memory'");

        Self {
            database_url,
            host,
            port,
            store,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_backend_parses_known_values() {
        assert_eq!(
            "postgres".parse::<StoreBackend>().unwrap(),
            StoreBackend::Postgres
        );
        assert_eq!(
            "Memory".parse::<StoreBackend>().unwrap(),
            StoreBackend::Memory
        );
    }

    #[test]
    fn store_backend_rejects_unknown_values() {
        assert!("redis".parse::<StoreBackend>().is_err());
    }
}
