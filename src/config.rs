use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_API_BASE: &str = "https://calm-plum-jaguar-tutu.cyclic.app/todos";

/// Server-rendered todo list backed by a remote todo API.
#[derive(Debug, Clone, Parser)]
#[command(name = "todoview", version, about)]
pub struct Config {
    /// Address the web server listens on.
    #[arg(long, env = "TODO_LISTEN", default_value = "0.0.0.0:5876")]
    pub listen: SocketAddr,

    /// Base URL of the remote `/todos` collection.
    #[arg(long, env = "TODO_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Timeout for each call to the remote API, in seconds.
    #[arg(long = "timeout-secs", env = "TODO_API_TIMEOUT", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
