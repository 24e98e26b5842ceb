//! Trade side: the two halves of the book.
//!
//! The book keeps sell offers (asks) and buy offers (bids) in separate
//! bounded containers. `Side` selects one of them directly instead of
//! routing through a runtime key lookup, so an unknown side simply cannot
//! reach the core operations.
//!
//! ## Tokens
//!
//! Untyped callers (feeds, text protocols) address the sides with the
//! plural tokens `"asks"` and `"bids"`. These two strings are the entire
//! recognized vocabulary; [`Side::from_token`] returns `None` for anything
//! else, including the singular forms.

use std::fmt;

/// Side of the book an offer rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Sell offer - wants to sell the asset
    Ask,
    /// Buy offer - wants to purchase the asset
    Bid,
}

impl Side {
    /// Parse a textual side token.
    ///
    /// Only the canonical plural tokens are accepted.
    ///
    /// # Example
    ///
    /// ```
    /// use depthbook::types::Side;
    ///
    /// assert_eq!(Side::from_token("asks"), Some(Side::Ask));
    /// assert_eq!(Side::from_token("bids"), Some(Side::Bid));
    /// assert_eq!(Side::from_token("ask"), None);
    /// assert_eq!(Side::from_token("foo"), None);
    /// ```
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "asks" => Some(Side::Ask),
            "bids" => Some(Side::Bid),
            _ => None,
        }
    }

    /// Canonical token for this side.
    pub fn token(self) -> &'static str {
        match self {
            Side::Ask => "asks",
            Side::Bid => "bids",
        }
    }

    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Ask => Side::Bid,
            Side::Bid => Side::Ask,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
