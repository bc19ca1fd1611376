//! Error types for display formatting.
//!
//! Credential decoding, bech32 encoding and timestamp formatting each have
//! their own error enum so callers can tell which stage rejected a value.
//! Registry misses and unknown statuses are not errors: they have defined
//! fallbacks and never appear here.

use thiserror::Error;

// ============================================================================
// Stage Errors
// ============================================================================

/// A raw payment credential could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The credential text is not valid hexadecimal.
    #[error("Invalid credential hex: {0}")]
    InvalidHex(String),

    /// The byte count matches no recognized credential shape.
    #[error("Invalid credential length: {len} bytes")]
    InvalidLength {
        /// Number of bytes received.
        len: usize,
    },

    /// The leading discriminant byte names no known credential kind.
    #[error("Unknown credential tag: {0:#04x}")]
    UnknownTag(u8),
}

/// A prefix/payload pair could not be bech32-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The human-readable prefix is empty, too long, or has a disallowed character.
    #[error("Invalid bech32 prefix '{prefix}': {reason}")]
    InvalidPrefix {
        /// The rejected prefix.
        prefix: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The payload would push the encoded string past the length limit.
    #[error("Payload of {len} bytes exceeds maximum of {max} bytes")]
    PayloadTooLarge {
        /// Payload length in bytes.
        len: usize,
        /// Largest payload accepted for this prefix.
        max: usize,
    },
}

/// An epoch value could not be rendered as a calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The value lies outside the representable calendar range.
    #[error("Timestamp {0} is out of range")]
    OutOfRange(i64),
}

// ============================================================================
// Composite Errors
// ============================================================================

/// Failure while turning a raw credential into a display address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Failure while rendering a transaction row, tagged with the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("fromAddress: {0}")]
    FromAddress(AddressError),

    #[error("toAddress: {0}")]
    ToAddress(AddressError),

    #[error("createTime: {0}")]
    CreateTime(FormatError),

    #[error("endTime: {0}")]
    EndTime(FormatError),
}

/// Failure while loading a chain registry table.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The table is not valid registry JSON.
    #[error("Registry parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The table could not be read from disk.
    #[error("Registry read error: {0}")]
    Io(#[from] std::io::Error),
}

impl EncodeError {
    /// Create a new invalid prefix error.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The rejected prefix
    /// * `reason` - Short description of the violated rule
    #[must_use]
    pub fn invalid_prefix(prefix: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPrefix {
            prefix: prefix.into(),
            reason: reason.into(),
        }
    }
}

impl DisplayError {
    /// Returns the underlying address error, if this failure came from an address field.
    #[must_use]
    pub const fn address_error(&self) -> Option<&AddressError> {
        match self {
            Self::FromAddress(e) | Self::ToAddress(e) => Some(e),
            Self::CreateTime(_) | Self::EndTime(_) => None,
        }
    }

    /// Convert to a `color_eyre::Report` for the binary's error handling.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        assert_eq!(
            DecodeError::InvalidLength { len: 27 }.to_string(),
            "Invalid credential length: 27 bytes"
        );
        assert_eq!(
            DecodeError::UnknownTag(0x07).to_string(),
            "Unknown credential tag: 0x07"
        );
        assert_eq!(
            DecodeError::InvalidHex("zz".into()).to_string(),
            "Invalid credential hex: zz"
        );
    }

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::invalid_prefix("ADDR", "upper-case character");
        assert_eq!(
            err.to_string(),
            "Invalid bech32 prefix 'ADDR': upper-case character"
        );

        let err = EncodeError::PayloadTooLarge { len: 700, max: 633 };
        assert_eq!(
            err.to_string(),
            "Payload of 700 bytes exceeds maximum of 633 bytes"
        );
    }

    #[test]
    fn test_address_error_is_transparent() {
        let err: AddressError = DecodeError::UnknownTag(9).into();
        assert_eq!(err.to_string(), "Unknown credential tag: 0x09");
    }

    #[test]
    fn test_display_error_names_field() {
        let err = DisplayError::ToAddress(DecodeError::InvalidLength { len: 3 }.into());
        assert_eq!(err.to_string(), "toAddress: Invalid credential length: 3 bytes");
        assert!(err.address_error().is_some());

        let err = DisplayError::EndTime(FormatError::OutOfRange(i64::MAX));
        assert!(err.to_string().starts_with("endTime: Timestamp"));
        assert!(err.address_error().is_none());
    }

    #[test]
    fn test_into_report_keeps_message() {
        let err = DisplayError::CreateTime(FormatError::OutOfRange(-1));
        let report = err.into_report();
        assert_eq!(report.to_string(), "createTime: Timestamp -1 is out of range");
    }
}
