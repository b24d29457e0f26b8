use async_trait::async_trait;
use ferrous_lookup_domain::{DomainError, LookupQuery, Resolution};

/// Resolves a name to an IPv4 address, starting from a given server.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &LookupQuery) -> Result<Resolution, DomainError>;
}
