use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type shared by every esgboard crate.
///
/// Routing failures carry the connector or capability they came from; the
/// aggregate variants summarize a request that tried several providers.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EsgError {
    /// No connector offers this capability.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label, e.g. `"esg"`.
        capability: String,
    },

    /// Malformed data: an unparseable cell, an incomplete record, a bad archive.
    #[error("data issue: {0}")]
    Data(String),

    /// Rejected input such as an empty company list.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An input table lacks one or more required columns.
    #[error("missing required columns: {}", missing.join(", "))]
    MissingColumns {
        /// Names of the required columns that were not present.
        missing: Vec<String>,
    },

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// A connector failed; the message is the connector's own.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Name of the failing connector.
        connector: String,
        /// What went wrong.
        msg: String,
    },

    /// Anything else.
    #[error("unknown error: {0}")]
    Other(String),

    /// Nothing matched the company or query.
    #[error("not found: {what}")]
    NotFound {
        /// What was looked up, e.g. `"esg for Tesla"`.
        what: String,
    },

    /// Every eligible provider failed, for mixed reasons.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<EsgError>),

    /// One provider call ran past the per-provider timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Name of the slow connector.
        connector: String,
        /// Capability label.
        capability: String,
    },

    /// A whole request (e.g. a leaderboard) ran past its deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Label of the request that expired.
        capability: String,
    },

    /// Every eligible provider timed out.
    #[error("all providers timed out: {capability}")]
    AllProvidersTimedOut {
        /// Capability label.
        capability: String,
    },
}

impl EsgError {
    /// `Unsupported` for a capability label.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// `Connector` error tagged with the connector name.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// `NotFound` for a description such as `"esg for Apple"`.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// `ProviderTimeout` for one connector and capability.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// `RequestTimeout` for a request label.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Whether a user can do something about this error.
    ///
    /// Missing capabilities and plain not-found results are not actionable; an
    /// aggregate is actionable when any of its members is.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        match self {
            Self::Unsupported { .. } | Self::NotFound { .. } => false,
            Self::AllProvidersFailed(inner) => inner.iter().any(Self::is_actionable),
            _ => true,
        }
    }

    /// Unpack nested `AllProvidersFailed` aggregates into their leaf errors.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllProvidersFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}

impl From<std::io::Error> for EsgError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for EsgError {
    fn from(e: serde_json::Error) -> Self {
        Self::Data(e.to_string())
    }
}
