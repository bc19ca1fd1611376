//! Transfer status and its display severity.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

/// Status of a cross-chain transfer as reported upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TxStatus {
    /// Packet sent, acknowledgement not yet seen.
    Processing,
    /// Transfer completed on the destination chain.
    Success,
    /// Transfer failed or timed out.
    Failed,
    /// Any status text this crate does not know.
    Unrecognized(String),
}

impl TxStatus {
    /// Parse upstream status text. Only the exact lower-case names are known;
    /// anything else, including other casings or padding, is unrecognized.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text {
            "processing" => Self::Processing,
            "success" => Self::Success,
            "failed" => Self::Failed,
            _ => Self::Unrecognized(text.to_string()),
        }
    }

    /// Returns the status text as it would arrive upstream.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Processing => "processing",
            Self::Success => "success",
            Self::Failed => "failed",
            Self::Unrecognized(text) => text,
        }
    }

    /// Status text with its first letter upper-cased, for table cells.
    #[must_use]
    pub fn label(&self) -> String {
        let mut chars = self.as_str().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<String> for TxStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for TxStatus {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<TxStatus> for String {
    fn from(value: TxStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Severity
// ============================================================================

/// Display severity of a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTag {
    Error,
    Warning,
    Success,
}

impl StatusTag {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for StatusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a status to its severity.
///
/// Unrecognized statuses are reported as [`StatusTag::Error`] so an unknown
/// state is never shown as healthy.
#[must_use]
pub fn classify(status: &TxStatus) -> StatusTag {
    match status {
        TxStatus::Processing => StatusTag::Warning,
        TxStatus::Success => StatusTag::Success,
        TxStatus::Failed => StatusTag::Error,
        TxStatus::Unrecognized(text) => {
            tracing::debug!("Unrecognized transfer status '{text}', classifying as error");
            StatusTag::Error
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
