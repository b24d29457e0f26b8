#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_lookup_application::ports::DnsResolver;
use ferrous_lookup_domain::{DomainError, LookupQuery, Resolution};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<String, Resolution>>>,
    error_responses: Arc<RwLock<HashMap<String, DomainError>>>,
    calls: Arc<RwLock<Vec<LookupQuery>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, domain: &str, resolution: Resolution) {
        self.responses
            .write()
            .unwrap()
            .insert(domain.to_string(), resolution);
    }

    pub fn set_response_error(&self, domain: &str, error: DomainError) {
        self.error_responses
            .write()
            .unwrap()
            .insert(domain.to_string(), error);
    }

    pub fn calls(&self) -> Vec<LookupQuery> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &LookupQuery) -> Result<Resolution, DomainError> {
        self.calls.write().unwrap().push(query.clone());

        if let Some(err) = self.error_responses.read().unwrap().get(&*query.domain) {
            return Err(err.clone());
        }

        self.responses
            .read()
            .unwrap()
            .get(&*query.domain)
            .cloned()
            .ok_or_else(|| DomainError::NoReferral {
                server: query.start_server.to_string(),
            })
    }
}
