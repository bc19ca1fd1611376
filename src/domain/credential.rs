//! Payment credentials.
//!
//! A payment credential is the 28-byte hash an address commits to: either the
//! hash of a verification key or the hash of a script.

use super::error::DecodeError;

// ============================================================================
// Constants
// ============================================================================

/// Length in bytes of a key-hash or script-hash credential.
pub const CREDENTIAL_HASH_LEN: usize = 28;

/// Tag byte marking a key-hash credential in the tagged shape.
pub const KEY_HASH_TAG: u8 = 0;

/// Tag byte marking a script-hash credential in the tagged shape.
pub const SCRIPT_HASH_TAG: u8 = 1;

// ============================================================================
// Credential Types
// ============================================================================

/// What a payment credential hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    /// Hash of a verification key.
    KeyHash,
    /// Hash of a script.
    ScriptHash,
}

impl CredentialKind {
    /// Map a tag byte to a credential kind.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownTag`] for any tag other than 0 or 1.
    pub const fn from_tag(tag: u8) -> Result<Self, DecodeError> {
        match tag {
            KEY_HASH_TAG => Ok(Self::KeyHash),
            SCRIPT_HASH_TAG => Ok(Self::ScriptHash),
            other => Err(DecodeError::UnknownTag(other)),
        }
    }
}

/// A decoded payment credential.
///
/// Immutable once built; the only constructors are the decoding functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaymentCredential {
    kind: CredentialKind,
    hash: [u8; CREDENTIAL_HASH_LEN],
}

impl PaymentCredential {
    /// Interpret raw credential bytes.
    ///
    /// Two shapes are recognized:
    /// - 28 bytes: a bare key hash
    /// - 29 bytes: a tag byte (0 = key hash, 1 = script hash) followed by the hash
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidLength`] for any other length and
    /// [`DecodeError::UnknownTag`] for an unrecognized tag byte.
    pub fn decode(raw: &[u8]) -> Result<Self, DecodeError> {
        let (kind, hash) = match raw {
            bare if bare.len() == CREDENTIAL_HASH_LEN => (CredentialKind::KeyHash, bare),
            [tag, hash @ ..] if hash.len() == CREDENTIAL_HASH_LEN => {
                (CredentialKind::from_tag(*tag)?, hash)
            }
            _ => return Err(DecodeError::InvalidLength { len: raw.len() }),
        };

        let mut bytes = [0u8; CREDENTIAL_HASH_LEN];
        bytes.copy_from_slice(hash);
        Ok(Self { kind, hash: bytes })
    }

    /// Decode a credential supplied as hex text (either case).
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidHex`] if `text` is not hex, otherwise
    /// the same errors as [`PaymentCredential::decode`].
    pub fn from_hex(text: &str) -> Result<Self, DecodeError> {
        let raw = data_encoding::HEXLOWER_PERMISSIVE
            .decode(text.trim().as_bytes())
            .map_err(|e| DecodeError::InvalidHex(e.to_string()))?;
        Self::decode(&raw)
    }

    /// The kind of hash this credential carries.
    #[must_use]
    pub const fn kind(&self) -> CredentialKind {
        self.kind
    }

    /// The 28 hash bytes.
    #[must_use]
    pub const fn hash(&self) -> &[u8; CREDENTIAL_HASH_LEN] {
        &self.hash
    }
}

// ============================================================================
// Tests
// ============================================================================
