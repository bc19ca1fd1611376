//! Domain types for transfer display.
//!
//! # Module Organization
//!
//! - [`error`] - Error types for decoding, encoding and formatting
//! - [`credential`] - Payment credentials (key hash / script hash)
//! - [`network`] - Network context and per-network address parameters
//! - [`status`] - Transfer status and severity tags
//! - [`chain`] - Chain display metadata registry
//! - [`transaction`] - The transfer record consumed by the row formatter

// ============================================================================
// Module Declarations
// ============================================================================

pub mod chain;
pub mod credential;
pub mod error;
pub mod network;
pub mod status;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use chain::{ChainMetadata, ChainRegistry};
pub use credential::{CREDENTIAL_HASH_LEN, CredentialKind, PaymentCredential};
pub use error::{AddressError, DecodeError, DisplayError, EncodeError, FormatError, RegistryError};
pub use network::{LayoutParams, NetworkContext, NetworkParams, TestNetwork};
pub use status::{StatusTag, TxStatus, classify};
pub use transaction::TransactionRecord;
