#![allow(dead_code)]
use async_trait::async_trait;
use ferrous_lookup_domain::DomainError;
use ferrous_lookup_infrastructure::dns::{DnsTransport, TransportResponse};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Responder = Arc<dyn Fn(&[u8]) -> Vec<u8> + Send + Sync>;

#[derive(Clone)]
pub enum Script {
    Respond(Responder),
    Timeout,
    Fail(String),
}

/// In-memory transport keyed by server address. Records every call.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    scripts: Arc<Mutex<HashMap<IpAddr, Script>>>,
    calls: Arc<Mutex<Vec<(SocketAddr, Vec<u8>)>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond<F>(self, server: Ipv4Addr, f: F) -> Self
    where
        F: Fn(&[u8]) -> Vec<u8> + Send + Sync + 'static,
    {
        self.script(server, Script::Respond(Arc::new(f)))
    }

    pub fn timeout(self, server: Ipv4Addr) -> Self {
        self.script(server, Script::Timeout)
    }

    pub fn fail(self, server: Ipv4Addr, reason: &str) -> Self {
        self.script(server, Script::Fail(reason.to_string()))
    }

    fn script(self, server: Ipv4Addr, script: Script) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(IpAddr::V4(server), script);
        self
    }

    pub fn calls(&self) -> Vec<SocketAddr> {
        self.calls.lock().unwrap().iter().map(|(a, _)| *a).collect()
    }

    pub fn sent_queries(&self) -> Vec<Vec<u8>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, q)| q.clone())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl DnsTransport for ScriptedTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((server, message_bytes.to_vec()));

        let script = self.scripts.lock().unwrap().get(&server.ip()).cloned();

        match script {
            Some(Script::Respond(f)) => Ok(TransportResponse {
                bytes: f(message_bytes),
                protocol_used: "SCRIPTED",
            }),
            Some(Script::Timeout) => Err(DomainError::QueryTimeout {
                server: server.to_string(),
            }),
            Some(Script::Fail(reason)) => Err(DomainError::Transport {
                server: server.to_string(),
                reason,
            }),
            None => Err(DomainError::Transport {
                server: server.to_string(),
                reason: "no script for server".to_string(),
            }),
        }
    }

    fn protocol_name(&self) -> &'static str {
        "SCRIPTED"
    }
}
