//! Shared test fixtures following the Mother pattern.
#![allow(dead_code)]

use crate::domain::{CREDENTIAL_HASH_LEN, TransactionRecord, TxStatus};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct CredentialMother;

impl CredentialMother {
    /// 28 zero bytes, bare key-hash shape.
    #[must_use]
    pub fn zero_key_hash() -> Vec<u8> {
        vec![0; CREDENTIAL_HASH_LEN]
    }

    /// Script tag followed by 28 zero bytes.
    #[must_use]
    pub fn zero_script_hash() -> Vec<u8> {
        let mut raw = vec![1];
        raw.extend_from_slice(&[0; CREDENTIAL_HASH_LEN]);
        raw
    }

    /// Bytes 0x00..=0x1b, bare key-hash shape.
    #[must_use]
    pub fn counting_key_hash() -> Vec<u8> {
        (0u8..28).collect()
    }

    #[must_use]
    pub fn hex(raw: &[u8]) -> String {
        data_encoding::HEXLOWER.encode(raw)
    }
}

pub struct RecordMother;

impl RecordMother {
    /// Completed transfer from Osmosis with both hashes and timestamps.
    #[must_use]
    pub fn success() -> TransactionRecord {
        TransactionRecord {
            from_tx_hash: "a1b2c3d4e5f6".to_string(),
            from_address: CredentialMother::hex(&CredentialMother::zero_key_hash()),
            from_chain_id: "osmosis-1".to_string(),
            to_address: CredentialMother::hex(&CredentialMother::counting_key_hash()),
            to_tx_hash: Some("ffeeddccbbaa0099".to_string()),
            status: TxStatus::Success,
            create_time: 1_700_000_000,
            end_time: Some(1_700_003_600),
        }
    }

    /// In-flight transfer: no receiving hash, no end time.
    #[must_use]
    pub fn processing() -> TransactionRecord {
        TransactionRecord {
            from_tx_hash: "0badc0ffee0badc0ffee".to_string(),
            from_chain_id: "sidechain".to_string(),
            to_tx_hash: None,
            status: TxStatus::Processing,
            end_time: None,
            ..Self::success()
        }
    }
}
