//! Point-in-time market snapshot.
//!
//! A snapshot is a disconnected copy of the book: it shares no storage
//! with the [`crate::OrderBook`] that produced it, so callers may hold,
//! mutate, or discard it freely without touching market state.

use crate::types::Offer;

/// Sorted, disconnected copy of both sides of the book.
///
/// Each side is sorted ascending by price. Empty sides are empty
/// vectors, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketSnapshot {
    /// Sell offers, ascending by price (best ask first)
    pub asks: Vec<Offer>,

    /// Buy offers, ascending by price (best bid last)
    pub bids: Vec<Offer>,
}

impl MarketSnapshot {
    /// Total number of offers across both sides
    #[inline]
    pub fn len(&self) -> usize {
        self.asks.len() + self.bids.len()
    }

    /// Check if both sides are empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.asks.is_empty() && self.bids.is_empty()
    }

    /// The lowest-priced ask, if any
    #[inline]
    pub fn best_ask(&self) -> Option<Offer> {
        self.asks.first().copied()
    }

    /// The highest-priced bid, if any
    #[inline]
    pub fn best_bid(&self) -> Option<Offer> {
        self.bids.last().copied()
    }

    /// Best-ask minus best-bid price.
    ///
    /// `None` when either side is empty or the book is crossed.
    pub fn spread(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) if ask.price >= bid.price => Some(ask.price - bid.price),
            _ => None,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
