use ferrous_lookup_domain::ResolverConfig;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct IterativeResolverConfig {
    /// Destination port on every server queried.
    pub port: u16,

    pub query_timeout: Duration,

    /// Maximum number of servers queried for one lookup.
    pub max_steps: usize,
}

impl Default for IterativeResolverConfig {
    fn default() -> Self {
        Self {
            port: 53,
            query_timeout: Duration::from_secs(5),
            max_steps: 16,
        }
    }
}

impl IterativeResolverConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

impl From<&ResolverConfig> for IterativeResolverConfig {
    fn from(cfg: &ResolverConfig) -> Self {
        Self {
            port: cfg.port,
            query_timeout: cfg.query_timeout(),
            max_steps: cfg.max_steps,
        }
    }
}
