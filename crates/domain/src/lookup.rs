use std::net::Ipv4Addr;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LookupQuery {
    pub domain: Arc<str>,
    pub start_server: Ipv4Addr,
}

impl LookupQuery {
    pub fn new(domain: impl Into<Arc<str>>, start_server: Ipv4Addr) -> Self {
        Self {
            domain: domain.into(),
            start_server,
        }
    }
}

/// Outcome of a successful iterative lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub address: Ipv4Addr,
    /// Number of servers queried, including the one that answered.
    pub hops: usize,
    pub answered_by: Ipv4Addr,
}
