use thiserror::Error;

use storefront_core::DomainError;

/// Which kind of record failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Order,
    Product,
}

impl core::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RecordKind::Order => f.write_str("order"),
            RecordKind::Product => f.write_str("product"),
        }
    }
}

#[derive(Debug, Error)]
pub enum FeedError {
    /// The body is not JSON of the expected envelope shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend answered with `success: false`.
    #[error("backend rejected the request: {message}")]
    Rejected { message: String },

    /// A record is missing a required field or carries an invalid value.
    #[error("{kind} #{index} violates the data contract: {source}")]
    Contract {
        kind: RecordKind,
        index: usize,
        #[source]
        source: DomainError,
    },
}

impl FeedError {
    pub fn rejected(message: Option<String>) -> Self {
        Self::Rejected {
            message: message.unwrap_or_else(|| "no message".to_string()),
        }
    }
}
