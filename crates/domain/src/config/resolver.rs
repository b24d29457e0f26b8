use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::time::Duration;

pub const MAX_STEPS_LIMIT: usize = 64;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Server the lookup starts from, usually a root server.
    #[serde(default)]
    pub root_server: Option<String>,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-query timeout in seconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Maximum number of servers queried for one lookup.
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,

    /// Drop datagrams whose transaction id or source address does not match
    /// the outstanding query instead of treating them as the reply.
    #[serde(default = "default_true")]
    pub verify_transaction_id: bool,
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout)
    }

    pub fn root_server_addr(&self) -> Option<Result<Ipv4Addr, String>> {
        self.root_server.as_deref().map(|raw| {
            raw.trim()
                .parse::<Ipv4Addr>()
                .map_err(|e| format!("Invalid root server '{}': {}", raw, e))
        })
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_server: None,
            port: default_port(),
            query_timeout: default_query_timeout(),
            max_steps: default_max_steps(),
            verify_transaction_id: true,
        }
    }
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout() -> u64 {
    5
}

fn default_max_steps() -> usize {
    16
}

fn default_true() -> bool {
    true
}
