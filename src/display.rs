//! Transfer row rendering.
//!
//! [`RowFormatter`] turns a [`TransactionRecord`] into the flat set of
//! strings and tags a table row shows. Each field is formatted
//! independently; the first address or timestamp failure is returned as a
//! [`DisplayError`] naming the field.

use chrono::{FixedOffset, Offset, Utc};
use serde::Serialize;

use crate::address::format_address_hex;
use crate::constants::{
    ADDRESS_HEAD_LEN, ADDRESS_TAIL_LEN, HASH_HEAD_LEN, HASH_TAIL_LEN, MISSING_VALUE,
};
use crate::domain::{
    ChainRegistry, DisplayError, NetworkContext, StatusTag, TransactionRecord, classify,
};
use crate::format::{format_timestamp, truncate};

// ============================================================================
// Options
// ============================================================================

/// Knobs for row rendering. The defaults match the explorer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub hash_head: usize,
    pub hash_tail: usize,
    pub address_head: usize,
    pub address_tail: usize,
    /// Render timestamps as time of day only.
    pub time_only: bool,
    /// Offset timestamps are shown in.
    pub offset: FixedOffset,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            hash_head: HASH_HEAD_LEN,
            hash_tail: HASH_TAIL_LEN,
            address_head: ADDRESS_HEAD_LEN,
            address_tail: ADDRESS_TAIL_LEN,
            time_only: true,
            offset: Utc.fix(),
        }
    }
}

impl DisplayOptions {
    #[must_use]
    pub const fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub const fn with_time_only(mut self, time_only: bool) -> Self {
        self.time_only = time_only;
        self
    }
}

// ============================================================================
// Row
// ============================================================================

/// Display-ready values for one transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowDisplay {
    pub from_hash_display: String,
    pub from_address_display: String,
    pub chain_display_name: String,
    pub chain_logo_ref: Option<String>,
    pub status_tag: StatusTag,
    pub status_label: String,
    pub to_address_display: String,
    pub to_hash_display: String,
    pub create_time_display: String,
    pub end_time_display: String,
}

/// Renders transfer records against a chain registry.
#[derive(Debug, Clone, Copy)]
pub struct RowFormatter<'a> {
    registry: &'a ChainRegistry,
    options: DisplayOptions,
}

impl<'a> RowFormatter<'a> {
    #[must_use]
    pub const fn new(registry: &'a ChainRegistry, options: DisplayOptions) -> Self {
        Self { registry, options }
    }

    #[must_use]
    pub const fn options(&self) -> &DisplayOptions {
        &self.options
    }

    /// Render one record for `network`.
    ///
    /// # Errors
    ///
    /// Returns a [`DisplayError`] for the first field that cannot be
    /// formatted, checked in the order from address, to address, create
    /// time, end time. Chain and status lookups never fail. A failed record
    /// yields no row at all; the fields that did format are discarded.
    pub fn format(
        &self,
        record: &TransactionRecord,
        network: NetworkContext,
    ) -> Result<RowDisplay, DisplayError> {
        let opts = &self.options;

        let from_address = format_address_hex(&record.from_address, network)
            .map_err(DisplayError::FromAddress)?;
        let to_address =
            format_address_hex(&record.to_address, network).map_err(DisplayError::ToAddress)?;

        let create_time = format_timestamp(record.create_time, opts.time_only, opts.offset)
            .map_err(DisplayError::CreateTime)?;
        let end_time = match record.end_time {
            Some(t) => format_timestamp(t, opts.time_only, opts.offset)
                .map_err(DisplayError::EndTime)?,
            None => MISSING_VALUE.to_string(),
        };

        let chain = self.registry.resolve(&record.from_chain_id);

        Ok(RowDisplay {
            from_hash_display: truncate(&record.from_tx_hash, opts.hash_head, opts.hash_tail),
            from_address_display: truncate(&from_address, opts.address_head, opts.address_tail),
            chain_display_name: chain.pretty_name,
            chain_logo_ref: chain.logo_ref,
            status_tag: classify(&record.status),
            status_label: record.status.label(),
            to_address_display: truncate(&to_address, opts.address_head, opts.address_tail),
            to_hash_display: record.to_tx_hash().map_or_else(
                || MISSING_VALUE.to_string(),
                |h| truncate(h, opts.hash_head, opts.hash_tail),
            ),
            create_time_display: create_time,
            end_time_display: end_time,
        })
    }

    /// Render many records, keeping each record's outcome.
    pub fn format_all<'r>(
        &self,
        records: &'r [TransactionRecord],
        network: NetworkContext,
    ) -> Vec<(&'r TransactionRecord, Result<RowDisplay, DisplayError>)> {
        records
            .iter()
            .map(|record| (record, self.format(record, network)))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
