//! Iterative resolution engine
//!
//! Starting from one server, each hop sends an A query, decodes the reply
//! and either returns the first A answer or follows the referral to the
//! next server. The first failure ends the lookup; nothing is retried.

use super::config::IterativeResolverConfig;
use super::referral::{find_answer, select_next_server};
use crate::dns::events::{LookupEventEmitter, LookupStep, StepDecision};
use crate::dns::transport::DnsTransport;
use crate::dns::wire::{MessageBuilder, ResponseParser};
use async_trait::async_trait;
use ferrous_lookup_application::ports::DnsResolver;
use ferrous_lookup_domain::{DecodedMessage, DomainError, LookupQuery, Resolution};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

pub struct IterativeResolver<T: DnsTransport> {
    transport: T,
    config: IterativeResolverConfig,
    emitter: LookupEventEmitter,
}

impl<T: DnsTransport> IterativeResolver<T> {
    pub fn new(transport: T, config: IterativeResolverConfig) -> Self {
        debug!(
            protocol = transport.protocol_name(),
            port = config.port,
            timeout_ms = config.query_timeout.as_millis() as u64,
            max_steps = config.max_steps,
            "Iterative resolver created"
        );

        Self {
            transport,
            config,
            emitter: LookupEventEmitter::new_disabled(),
        }
    }

    pub fn with_event_emitter(mut self, emitter: LookupEventEmitter) -> Self {
        self.emitter = emitter;
        self
    }

    /// Resolves `domain` to an IPv4 address, starting at `start_server`.
    pub async fn resolve_from(
        &self,
        domain: &str,
        start_server: Ipv4Addr,
    ) -> Result<Resolution, DomainError> {
        let domain: Arc<str> = domain.into();
        let mut current = start_server;

        for hop in 1..=self.config.max_steps {
            let started = Instant::now();

            let message = match self.exchange(&domain, current).await {
                Ok(message) => Arc::new(message),
                Err(e) => {
                    warn!(hop, server = %current, error = %e, "Query failed");
                    let decision = StepDecision::Failed(e.kind().to_string());
                    self.trace(&domain, hop, current, started, None, decision);
                    return Err(e);
                }
            };

            if let Some(address) = find_answer(&message) {
                debug!(hop, server = %current, address = %address, "Answer received");
                let decision = StepDecision::Answer(address);
                self.trace(&domain, hop, current, started, Some(message), decision);
                return Ok(Resolution {
                    address,
                    hops: hop,
                    answered_by: current,
                });
            }

            let Some(next) = select_next_server(&message) else {
                let err = DomainError::NoReferral {
                    server: current.to_string(),
                };
                warn!(hop, server = %current, "No answer and no usable referral");
                let decision = StepDecision::Failed(err.kind().to_string());
                self.trace(&domain, hop, current, started, Some(message), decision);
                return Err(err);
            };

            debug!(
                hop,
                server = %current,
                next = %next.address,
                via_ns = next.via_ns.as_deref().unwrap_or("-"),
                "Following referral"
            );
            self.trace(
                &domain,
                hop,
                current,
                started,
                Some(message),
                StepDecision::Referral {
                    next: next.address,
                    via_ns: next.via_ns,
                },
            );
            current = next.address;
        }

        warn!(
            domain = %domain,
            max_steps = self.config.max_steps,
            "Maximum referral depth exceeded"
        );
        Err(DomainError::TooManyHops {
            max_steps: self.config.max_steps,
        })
    }

    /// One query/response exchange. Every query gets a fresh transaction id.
    async fn exchange(
        &self,
        domain: &str,
        server: Ipv4Addr,
    ) -> Result<DecodedMessage, DomainError> {
        let (id, query) = MessageBuilder::build_query_with_id(domain)
            .map_err(|e| DomainError::InvalidDomainName(e.to_string()))?;
        let addr = SocketAddr::from((server, self.config.port));

        debug!(id, server = %addr, "Sending query");
        let response = self
            .transport
            .send(addr, &query, self.config.query_timeout)
            .await?;

        let message = ResponseParser::parse(&response.bytes)?;
        if message.header.is_truncated() {
            // No TCP fallback: the records that did arrive are used as-is.
            warn!(
                id,
                server = %addr,
                reply_id = message.header.id,
                "Reply has the TC bit set"
            );
        }

        Ok(message)
    }

    fn trace(
        &self,
        domain: &Arc<str>,
        hop: usize,
        server: Ipv4Addr,
        started: Instant,
        response: Option<Arc<DecodedMessage>>,
        decision: StepDecision,
    ) {
        if !self.emitter.is_enabled() {
            return;
        }

        self.emitter.emit(LookupStep {
            domain: Arc::clone(domain),
            hop,
            server,
            response_time_us: started.elapsed().as_micros() as u64,
            response,
            decision,
        });
    }
}

#[async_trait]
impl<T: DnsTransport> DnsResolver for IterativeResolver<T> {
    async fn resolve(&self, query: &LookupQuery) -> Result<Resolution, DomainError> {
        self.resolve_from(&query.domain, query.start_server).await
    }
}
