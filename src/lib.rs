//! # depthbook
//!
//! Bounded depth-of-market order book registry.
//!
//! ## Architecture
//!
//! The crate consists of:
//! - **Types**: Core data structures (Offer, Side, fixed-point prices)
//! - **Book**: The depth-bounded registry with id-keyed offer storage
//!
//! ## Design Principles
//!
//! 1. **No Floating Point**: All prices use fixed-point arithmetic
//!    (10^8 scaling)
//! 2. **Pre-allocated Memory**: Slab allocation sized to the configured
//!    depth, O(1) offer operations
//! 3. **Typed Core**: Side selection and numeric kinds are enforced by
//!    the type system; runtime checks live only at the raw text boundary
//! 4. **Synchronous Execution**: Every operation is an immediate state
//!    transition or read; callers add their own locking if they share a
//!    book
//!
//! ## Example
//!
//! ```
//! use depthbook::{OrderBook, Side};
//!
//! let mut book = OrderBook::new(20).unwrap();
//!
//! let ask = book.add_offer(Side::Ask, 5_000_000_000, 1).unwrap(); // 50.0
//! let bid = book.add_offer(Side::Bid, 1_000_000_000, 2).unwrap(); // 10.0
//! assert_eq!((ask, bid), (1, 2));
//!
//! let snapshot = book.market_snapshot();
//! assert_eq!(snapshot.asks.len(), 1);
//! assert_eq!(snapshot.bids.len(), 1);
//!
//! let purged = book.purge_offer(ask).unwrap();
//! assert_eq!(purged.price, 5_000_000_000);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Offer, Side, fixed-point prices
pub mod types;

/// Order book: depth-bounded registry with id-keyed storage
pub mod book;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use book::{BookError, MarketSnapshot, OfferId, OrderBook, SideBook, DEFAULT_DEPTH};
pub use types::{Offer, Side};
