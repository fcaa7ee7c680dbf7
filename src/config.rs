//! Server Configuration
//!
//! Resolves where to listen, which dataset to load and which access token to accept.
//! Command-line flags win over environment variables, which win over defaults.

use anyhow::{Context, Result, bail};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_DATASET: &str = "dataset.xml";
pub const DEFAULT_ACCESS_TOKEN: &str = "secret";

pub const ENV_BIND: &str = "SEARCH_BIND";
pub const ENV_DATASET: &str = "SEARCH_DATASET";
pub const ENV_ACCESS_TOKEN: &str = "SEARCH_ACCESS_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub dataset: PathBuf,
    pub access_token: String,
}

impl ServerConfig {
    /// Reads the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        Self::from_sources(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// `args` excludes the program name; `env` looks up one variable.
    pub fn from_sources<I, F>(args: I, env: F) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let args: Vec<String> = args.into_iter().collect();

        let mut bind: Option<String> = None;
        let mut dataset: Option<String> = None;
        let mut access_token: Option<String> = None;

        let mut i = 0;
        while i < args.len() {
            let slot = match args[i].as_str() {
                "--bind" => &mut bind,
                "--dataset" => &mut dataset,
                "--token" => &mut access_token,
                _ => {
                    i += 1;
                    continue;
                }
            };

            match args.get(i + 1) {
                Some(value) => *slot = Some(value.clone()),
                None => bail!("{} requires a value", args[i]),
            }
            i += 2;
        }

        let bind = bind
            .or_else(|| env(ENV_BIND))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind
            .parse()
            .with_context(|| format!("Invalid bind address {:?}", bind))?;

        let dataset = dataset
            .or_else(|| env(ENV_DATASET))
            .unwrap_or_else(|| DEFAULT_DATASET.to_string());

        let access_token = access_token
            .or_else(|| env(ENV_ACCESS_TOKEN))
            .unwrap_or_else(|| DEFAULT_ACCESS_TOKEN.to_string());

        Ok(Self {
            bind,
            dataset: PathBuf::from(dataset),
            access_token,
        })
    }
}
