//! Script replay: build one record and apply commands to it in order.

use stockroom_core::{DomainError, DomainResult};
use stockroom_inventory::{StockCommand, StockRecord};

use crate::script::StockScript;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ReplayOptions {
    /// Stop at the first rejected command.
    pub fail_fast: bool,
}

/// A command the record refused. The record was left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Zero-based position of the command in the script.
    pub index: usize,
    pub command: StockCommand,
    pub error: DomainError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    pub record: StockRecord,
    pub applied: usize,
    pub rejected: Vec<Rejection>,
    /// True when `fail_fast` stopped the replay before the last command.
    pub halted: bool,
}

/// Replay `script` against a freshly created record.
///
/// Fails only when the initial record is invalid. Rejected commands are
/// collected in the report (and logged) rather than aborting the run, unless
/// `fail_fast` is set.
pub fn replay(script: &StockScript, options: ReplayOptions) -> DomainResult<ReplayReport> {
    let mut record = StockRecord::from_command(&script.record).inspect_err(|err| {
        tracing::error!(
            product_id = %script.record.product_id,
            error_kind = err.kind(),
            error = %err,
            "stock record rejected"
        );
    })?;

    let span = tracing::info_span!("replay", product_id = %record.product_id());
    let _guard = span.enter();

    tracing::info!(
        location = %record.location(),
        on_hand = record.on_hand(),
        reorder_threshold = record.reorder_threshold(),
        max_capacity = record.max_capacity(),
        "stock record created"
    );

    let mut applied = 0;
    let mut rejected = Vec::new();
    let mut halted = false;

    for (index, command) in script.commands.iter().enumerate() {
        match record.execute(command) {
            Ok(()) => {
                applied += 1;
                tracing::info!(
                    index,
                    command = command.name(),
                    location = %record.location(),
                    on_hand = record.on_hand(),
                    reserved = record.reserved(),
                    available = record.available(),
                    "command applied"
                );
            }
            Err(error) => {
                tracing::warn!(
                    index,
                    command = command.name(),
                    error_kind = error.kind(),
                    error = %error,
                    "command rejected"
                );
                rejected.push(Rejection {
                    index,
                    command: command.clone(),
                    error,
                });
                if options.fail_fast {
                    halted = index + 1 < script.commands.len();
                    break;
                }
            }
        }
    }

    if record.is_reorder_needed() {
        tracing::info!(
            available = record.available(),
            reorder_threshold = record.reorder_threshold(),
            "reorder needed"
        );
    }

    Ok(ReplayReport {
        record,
        applied,
        rejected,
        halted,
    })
}
