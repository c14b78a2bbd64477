//! # Error Types
//!
//! Errors for the fallible helpers around the classifier.
//!
//! Classification itself never fails; these only surface when parsing
//! identifiers supplied by callers.

use thiserror::Error;

/// Errors raised by acervo-core parsing helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A question slot identifier did not match any known slot.
    #[error("unknown question slot: {0}")]
    UnknownSlot(String),

    /// A criticality level identifier did not match any known level.
    #[error("unknown criticality level: {0}")]
    UnknownLevel(String),
}
