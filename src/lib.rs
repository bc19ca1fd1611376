//! Display formatting for Cardano IBC cross-chain transfer records.
//!
//! Given a transfer record and an explicit network, this crate produces the
//! strings a transfer table shows: bech32 addresses from payment credentials,
//! truncated hashes, formatted timestamps, a status severity and chain
//! metadata. Every function is pure and synchronous; the only shared state
//! is the read-only built-in chain registry.
//!
//! # Module Organization
//!
//! - [`codec`] - Bech32 encoding
//! - [`address`] - Credential to address formatting
//! - [`format`] - Truncation and timestamp formatting
//! - [`display`] - Whole-row rendering
//! - [`domain`] - Records, credentials, networks, statuses, chain registry, errors
//! - [`config`] - Persisted settings for the command-line renderer

pub mod address;
pub mod codec;
pub mod config;
pub mod constants;
pub mod display;
pub mod domain;
pub mod format;

#[cfg(test)]
pub(crate) mod test_utils;

pub use address::{format_address, format_address_hex};
pub use display::{DisplayOptions, RowDisplay, RowFormatter};
pub use domain::{ChainMetadata, ChainRegistry, NetworkContext, StatusTag, TransactionRecord};
