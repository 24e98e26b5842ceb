//! The order book registry module.
//!
//! ## Components
//!
//! - [`OrderBook`]: The depth-bounded registry and its operations
//! - [`SideBook`]: One side's bounded storage (slab + id index)
//! - [`MarketSnapshot`]: Sorted, disconnected copy of both sides
//! - [`BookError`]: The error taxonomy all operations report
//!
//! ## Example
//!
//! ```
//! use depthbook::book::OrderBook;
//! use depthbook::types::Side;
//!
//! let mut book = OrderBook::new(20).unwrap();
//! let id = book.add_offer(Side::Bid, 100_000_000, 2).unwrap();
//!
//! assert_eq!(book.market_snapshot().bids.len(), 1);
//! book.purge_offer(id).unwrap();
//! ```

pub mod error;
pub mod order_book;
pub mod side_book;
pub mod snapshot;

pub use error::BookError;
pub use order_book::{OfferId, OrderBook, DEFAULT_DEPTH};
pub use side_book::SideBook;
pub use snapshot::MarketSnapshot;
