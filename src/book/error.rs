//! Order book error types.

use thiserror::Error;

use crate::book::order_book::OfferId;
use crate::types::Side;

/// Errors that can occur during order book operations.
///
/// Every failure is surfaced to the caller immediately; a failed
/// operation leaves the book exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    /// Book depth of zero requested at construction.
    #[error("invalid book depth: {0}")]
    InvalidDepth(usize),

    /// A raw parameter failed to parse as its expected primitive kind.
    #[error("parameter `{name}` is not {expected}: `{value}`")]
    InvalidParamType {
        /// Parameter name as it appears in the operation signature.
        name: &'static str,
        /// Expected primitive kind, e.g. "a decimal number".
        expected: &'static str,
        /// The offending raw input.
        value: String,
    },

    /// A parameter has the right kind but a disallowed value
    /// (non-positive price or quantity, unrecognized side token).
    #[error("parameter `{name}` has invalid value: `{value}`")]
    InvalidParamValue {
        /// Parameter name as it appears in the operation signature.
        name: &'static str,
        /// The offending value, rendered for display.
        value: String,
    },

    /// The targeted side already holds `depth` offers.
    #[error("{side} side is full at depth {depth}")]
    SideOverflow {
        /// Side the insertion targeted.
        side: Side,
        /// Configured per-side capacity.
        depth: usize,
    },

    /// No offer with the given id on either side.
    #[error("no offer with id {0}")]
    NoSuchElement(OfferId),
}

// ============================================================================
// Unit Tests
// ============================================================================
