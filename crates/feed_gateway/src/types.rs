use std::fmt;

use feed_core::{Fact, FetchTicket};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    FactsFetched {
        ticket: FetchTicket,
        result: Result<Vec<Fact>, GatewayError>,
    },
    FactCreated {
        result: Result<Fact, GatewayError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct GatewayError {
    pub kind: FailureKind,
    pub message: String,
}

impl GatewayError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Encode,
    HttpStatus(u16),
    Timeout,
    Decode,
    EmptyResponse,
    Unavailable,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Encode => write!(f, "unencodable request"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Decode => write!(f, "undecodable response"),
            FailureKind::EmptyResponse => write!(f, "empty response"),
            FailureKind::Unavailable => write!(f, "store unavailable"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
