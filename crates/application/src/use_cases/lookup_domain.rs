use crate::ports::DnsResolver;
use ferrous_lookup_domain::{
    normalize_domain_name, validate_domain_name, DomainError, LookupQuery, Resolution,
};
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

pub struct LookupDomainUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl LookupDomainUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(
        &self,
        domain: &str,
        start_server: Ipv4Addr,
    ) -> Result<Resolution, DomainError> {
        let domain = normalize_domain_name(domain.trim());
        validate_domain_name(domain).map_err(|e| DomainError::InvalidDomainName(e.to_string()))?;

        let start = Instant::now();
        let query = LookupQuery::new(domain, start_server);

        match self.resolver.resolve(&query).await {
            Ok(resolution) => {
                info!(
                    domain = %query.domain,
                    address = %resolution.address,
                    hops = resolution.hops,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Lookup resolved"
                );
                Ok(resolution)
            }
            Err(e) => {
                warn!(
                    domain = %query.domain,
                    start_server = %start_server,
                    kind = e.kind(),
                    error = %e,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Lookup failed"
                );
                Err(e)
            }
        }
    }
}
