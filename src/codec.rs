//! Bech32 encoding (BIP-173).
//!
//! Thin typed wrapper over the `bech32` crate. Only the encoding direction
//! is exposed; output is always lower-case.

use bech32::{Bech32, Hrp};

use crate::domain::EncodeError;

// ============================================================================
// Constants
// ============================================================================

/// Longest encoded string the checksum is guaranteed to protect.
pub const MAX_ENCODED_LEN: usize = 1023;

/// Longest human-readable prefix allowed.
pub const MAX_PREFIX_LEN: usize = 83;

const CHECKSUM_LEN: usize = 6;

// ============================================================================
// Public API
// ============================================================================

/// Encode `payload` under the human-readable prefix `hrp`.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidPrefix`] if `hrp` is not a valid lower-case
/// bech32 prefix, and [`EncodeError::PayloadTooLarge`] if the result would
/// exceed [`MAX_ENCODED_LEN`] characters.
///
/// # Examples
///
/// ```
/// use ibc_tx_display::codec::encode;
///
/// assert_eq!(encode("a", &[]).unwrap(), "a12uel5l");
/// ```
pub fn encode(hrp: &str, payload: &[u8]) -> Result<String, EncodeError> {
    // An all upper-case prefix parses, but would be emitted lower-cased.
    if hrp.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(EncodeError::invalid_prefix(hrp, "upper-case character"));
    }
    let parsed = Hrp::parse(hrp).map_err(|e| EncodeError::invalid_prefix(hrp, e.to_string()))?;

    let max = max_payload_len(hrp);
    if payload.len() > max {
        return Err(EncodeError::PayloadTooLarge {
            len: payload.len(),
            max,
        });
    }

    bech32::encode::<Bech32>(parsed, payload).map_err(|e| {
        tracing::debug!("bech32 rejected {} byte payload: {e}", payload.len());
        EncodeError::PayloadTooLarge {
            len: payload.len(),
            max,
        }
    })
}

/// Largest payload, in bytes, that [`encode`] accepts for `hrp`.
#[must_use]
pub fn max_payload_len(hrp: &str) -> usize {
    let groups = MAX_ENCODED_LEN.saturating_sub(hrp.len() + 1 + CHECKSUM_LEN);
    groups * 5 / 8
}

// ============================================================================
// Tests
// ============================================================================
