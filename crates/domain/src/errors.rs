use thiserror::Error;

/// Failures raised while encoding or decoding RFC 1035 wire messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Truncated message: needed {needed} byte(s) at offset {offset}")]
    TruncatedMessage { offset: usize, needed: usize },

    #[error("Malformed name: {0}")]
    MalformedName(String),

    #[error("Compression pointer loop at offset {offset}")]
    CompressionLoop { offset: usize },
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Malformed DNS response: {0}")]
    MalformedResponse(#[from] WireError),

    #[error("Query timeout waiting for {server}")]
    QueryTimeout { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("No answer and no usable referral from {server}")]
    NoReferral { server: String },

    #[error("Referral chain exceeded {max_steps} hops")]
    TooManyHops { max_steps: usize },
}

impl DomainError {
    /// Short, stable label for the failure kind, used in logs and step traces.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::InvalidDomainName(_) => "INVALID_NAME",
            DomainError::MalformedResponse(WireError::TruncatedMessage { .. }) => "TRUNCATED",
            DomainError::MalformedResponse(WireError::MalformedName(_)) => "MALFORMED_NAME",
            DomainError::MalformedResponse(WireError::CompressionLoop { .. }) => {
                "COMPRESSION_LOOP"
            }
            DomainError::QueryTimeout { .. } => "TIMEOUT",
            DomainError::Transport { .. } => "TRANSPORT",
            DomainError::NoReferral { .. } => "NO_REFERRAL",
            DomainError::TooManyHops { .. } => "TOO_MANY_HOPS",
        }
    }
}
