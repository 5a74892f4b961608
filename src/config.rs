//! Runtime configuration from the environment. Call `dotenvy::dotenv()` first to pick up `.env`.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/books";
pub const DEFAULT_TEST_DATABASE_URL: &str = "postgres://localhost/books_test";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub database_url: String,
    pub bind_addr: IpAddr,
    pub port: u16,
    pub max_connections: u32,
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(&std::env::vars().collect())
    }

    /// `BOOKSTORE_ENV=test` switches to `TEST_DATABASE_URL`. Unparseable numbers fall back to defaults.
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let get = |k: &str| vars.get(k).map(String::as_str);
        let environment = match get("BOOKSTORE_ENV") {
            Some("test") => Environment::Test,
            _ => Environment::Development,
        };
        let database_url = match environment {
            Environment::Test => get("TEST_DATABASE_URL").unwrap_or(DEFAULT_TEST_DATABASE_URL),
            Environment::Development => get("DATABASE_URL").unwrap_or(DEFAULT_DATABASE_URL),
        }
        .to_string();
        Config {
            environment,
            database_url,
            bind_addr: get("BIND_ADDR")
                .and_then(|v| v.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            port: get("PORT").and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT),
            max_connections: get("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            max_body_bytes: get("MAX_BODY_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
