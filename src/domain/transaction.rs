//! Cross-chain transfer records.
//!
//! A record is consumed read-only. Field values are opaque to this crate:
//! nothing here checks that `end_time` follows `create_time` or that hashes
//! are well formed.

use serde::{Deserialize, Serialize};

use super::status::TxStatus;

/// One transfer as delivered by the explorer backend.
///
/// Timestamps are unix epoch seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Hash of the sending transaction.
    pub from_tx_hash: String,
    /// Sender payment credential, hex encoded.
    pub from_address: String,
    /// Chain the transfer originated on.
    pub from_chain_id: String,
    /// Receiver payment credential, hex encoded.
    pub to_address: String,
    /// Hash of the receiving transaction, once known.
    #[serde(default)]
    pub to_tx_hash: Option<String>,
    pub status: TxStatus,
    pub create_time: i64,
    /// Completion time, once known.
    #[serde(default)]
    pub end_time: Option<i64>,
}

impl TransactionRecord {
    /// The receiving transaction hash, treating an empty string as absent.
    #[must_use]
    pub fn to_tx_hash(&self) -> Option<&str> {
        self.to_tx_hash.as_deref().filter(|h| !h.is_empty())
    }
}

// ============================================================================
// Tests
// ============================================================================
