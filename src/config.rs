use anyhow::Result;
use serde::Deserialize;
use std::env;

use crate::search::PODWISE_SEARCH_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub client: ClientConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub search_url: String,
}

/// Settings for the terminal client
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub proxy_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                cors_allowed_origins: parse_origins(
                    &env::var("ALLOWED_ORIGINS")
                        .unwrap_or_else(|_| "http://localhost:3000".to_string()),
                ),
            },
            upstream: UpstreamConfig {
                search_url: env::var("PODWISE_SEARCH_URL")
                    .unwrap_or_else(|_| PODWISE_SEARCH_URL.to_string()),
            },
            client: ClientConfig {
                proxy_url: env::var("PROXY_URL")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 3000,
                host: "0.0.0.0".to_string(),
                cors_allowed_origins: vec!["http://localhost:3000".to_string()],
            },
            upstream: UpstreamConfig {
                search_url: PODWISE_SEARCH_URL.to_string(),
            },
            client: ClientConfig {
                proxy_url: "http://localhost:3000".to_string(),
            },
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
