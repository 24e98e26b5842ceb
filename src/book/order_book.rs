//! The depth-bounded order book registry.
//!
//! ## Architecture
//!
//! An [`OrderBook`] owns two independent [`SideBook`]s - one for asks,
//! one for bids - each bounded to the same configured depth, plus a
//! monotonically increasing offer id counter shared across both sides.
//!
//! ## Operations
//!
//! | Operation | Complexity |
//! |-------------------|------------|
//! | Add offer | O(1) |
//! | Purge offer by id | O(1) |
//! | Get offer by id | O(1) |
//! | Market snapshot | O(n log n) |
//!
//! ## Typed core, raw boundary
//!
//! The typed operations take [`Side`] and fixed-point numbers, so wrong
//! primitive kinds and unknown sides cannot reach them. Where input
//! truly arrives untyped (a text feed, a CLI), the `*_raw` variants
//! parse and validate at runtime, in a fixed, documented order.
//!
//! ## Example
//!
//! ```
//! use depthbook::{OrderBook, Side};
//!
//! let mut book = OrderBook::new(20).unwrap();
//!
//! let id = book.add_offer(Side::Ask, 100_000_000, 1).unwrap();
//! assert_eq!(id, 1);
//!
//! let offer = book.get_offer(id).unwrap();
//! assert_eq!(offer.price, 100_000_000);
//! assert_eq!(offer.quantity, 1);
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::trace;

use crate::book::error::BookError;
use crate::book::side_book::SideBook;
use crate::book::snapshot::MarketSnapshot;
use crate::types::{price, Offer, Side};

/// Opaque offer handle returned by [`OrderBook::add_offer`].
///
/// Ids are issued strictly increasing from 1 and are never reused within
/// one book instance, even after the offer is purged.
pub type OfferId = u64;

/// Conventional per-side depth used by [`OrderBook::default`].
pub const DEFAULT_DEPTH: usize = 20;

/// The first id a fresh book issues.
const FIRST_OFFER_ID: OfferId = 1;

/// A bounded, in-memory limit order book registry.
///
/// Holds resting sell offers (asks) and buy offers (bids), at most
/// `depth` per side. Offers are inserted, looked up, and removed by id;
/// [`OrderBook::market_snapshot`] produces a sorted, disconnected view
/// of both sides. The book performs no matching.
///
/// All state is owned by the instance - two books never share counters
/// or storage.
///
/// ## Concurrency
///
/// Every operation is a synchronous, non-blocking state transition or
/// read, and the book provides no internal synchronization. Callers that
/// share a book across threads must wrap it in their own mutual
/// exclusion (one lock per book).
#[derive(Debug, Clone)]
pub struct OrderBook {
    /// Per-side capacity, fixed at construction
    depth: usize,

    /// Next offer id to issue (incremented on every successful insertion)
    next_id: OfferId,

    /// Sell side
    asks: SideBook,

    /// Buy side
    bids: SideBook,
}

impl Default for OrderBook {
    /// A book with the conventional depth of 20 per side.
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            next_id: FIRST_OFFER_ID,
            asks: SideBook::new(DEFAULT_DEPTH),
            bids: SideBook::new(DEFAULT_DEPTH),
        }
    }
}

impl OrderBook {
    /// Create a book with the given per-side depth.
    ///
    /// # Errors
    ///
    /// [`BookError::InvalidDepth`] when `depth` is zero; no book value is
    /// produced in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use depthbook::OrderBook;
    ///
    /// let book = OrderBook::new(5).unwrap();
    /// assert_eq!(book.depth(), 5);
    ///
    /// assert!(OrderBook::new(0).is_err());
    /// ```
    pub fn new(depth: usize) -> Result<Self, BookError> {
        if depth == 0 {
            return Err(BookError::InvalidDepth(depth));
        }

        Ok(Self {
            depth,
            next_id: FIRST_OFFER_ID,
            asks: SideBook::new(depth),
            bids: SideBook::new(depth),
        })
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// The configured per-side depth
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of resting ask offers
    #[inline]
    pub fn ask_count(&self) -> usize {
        self.asks.len()
    }

    /// Number of resting bid offers
    #[inline]
    pub fn bid_count(&self) -> usize {
        self.bids.len()
    }

    /// Check if neither side holds any offers
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.asks.is_empty() && self.bids.is_empty()
    }

    /// Check if an offer id rests on either side
    #[inline]
    pub fn contains_offer(&self, id: OfferId) -> bool {
        self.asks.contains(id) || self.bids.contains(id)
    }

    /// The id the next successful insertion will return (no increment)
    #[inline]
    pub fn next_offer_id(&self) -> OfferId {
        self.next_id
    }

    // ========================================================================
    // Offer Management
    // ========================================================================

    /// Add an offer to one side of the book.
    ///
    /// Checks run in a fixed order: price value, quantity value, then
    /// the targeted side's capacity. The other side is not consulted.
    /// On success the offer is stored under a freshly issued id, the
    /// counter advances, and the id is returned; on failure the book is
    /// unchanged.
    ///
    /// # Arguments
    ///
    /// * `side` - Side the offer rests on
    /// * `price` - Price in fixed-point (scaled by 10^8), must be > 0
    /// * `quantity` - Number of lots, must be > 0
    ///
    /// # Errors
    ///
    /// * [`BookError::InvalidParamValue`] - zero price or quantity
    /// * [`BookError::SideOverflow`] - the targeted side already holds
    ///   `depth` offers
    ///
    /// # Example
    ///
    /// ```
    /// use depthbook::{OrderBook, Side};
    ///
    /// let mut book = OrderBook::new(1).unwrap();
    ///
    /// book.add_offer(Side::Ask, 500_000_000, 5).unwrap();
    /// assert!(book.add_offer(Side::Ask, 600_000_000, 6).is_err());
    ///
    /// // Capacity applies per side: the bid side is still open.
    /// book.add_offer(Side::Bid, 600_000_000, 6).unwrap();
    /// ```
    pub fn add_offer(&mut self, side: Side, price: u64, quantity: u64) -> Result<OfferId, BookError> {
        if price == 0 {
            return Err(BookError::InvalidParamValue {
                name: "price",
                value: price.to_string(),
            });
        }

        if quantity == 0 {
            return Err(BookError::InvalidParamValue {
                name: "quantity",
                value: quantity.to_string(),
            });
        }

        if self.side(side).is_full() {
            return Err(BookError::SideOverflow {
                side,
                depth: self.depth,
            });
        }

        let id = self.next_id;
        self.side_mut(side).insert(id, Offer::new(price, quantity));
        self.next_id += 1;

        trace!(%side, id, price, quantity, "offer added");

        Ok(id)
    }

    /// Remove an offer by id and return it.
    ///
    /// The ask side is searched first, then the bid side. The removed
    /// offer's id is not freed for reuse.
    ///
    /// # Errors
    ///
    /// [`BookError::NoSuchElement`] when the id rests on neither side.
    pub fn purge_offer(&mut self, id: OfferId) -> Result<Offer, BookError> {
        let offer = self
            .asks
            .remove(id)
            .or_else(|| self.bids.remove(id))
            .ok_or(BookError::NoSuchElement(id))?;

        trace!(id, "offer purged");

        Ok(offer)
    }

    /// Look up an offer by id without removing it.
    ///
    /// Same search order as [`OrderBook::purge_offer`], read-only. The
    /// offer comes back by value, detached from book storage.
    ///
    /// # Errors
    ///
    /// [`BookError::NoSuchElement`] when the id rests on neither side.
    pub fn get_offer(&self, id: OfferId) -> Result<Offer, BookError> {
        self.asks
            .get(id)
            .or_else(|| self.bids.get(id))
            .ok_or(BookError::NoSuchElement(id))
    }

    /// Point-in-time snapshot of both sides, each sorted ascending by
    /// price.
    ///
    /// The snapshot holds independent copies: mutating it cannot change
    /// the book, and taking it mutates nothing (the id counter included).
    /// Empty sides come back as empty sequences.
    ///
    /// # Example
    ///
    /// ```
    /// use depthbook::{OrderBook, Side};
    ///
    /// let mut book = OrderBook::new(20).unwrap();
    /// book.add_offer(Side::Ask, 5_000_000_000, 1).unwrap(); // 50
    /// book.add_offer(Side::Ask, 1_000_000_000, 1).unwrap(); // 10
    ///
    /// let snapshot = book.market_snapshot();
    /// assert_eq!(snapshot.asks[0].price, 1_000_000_000);
    /// assert_eq!(snapshot.asks[1].price, 5_000_000_000);
    /// assert!(snapshot.bids.is_empty());
    /// ```
    pub fn market_snapshot(&self) -> MarketSnapshot {
        MarketSnapshot {
            asks: self.asks.sorted_offers(),
            bids: self.bids.sorted_offers(),
        }
    }

    // ========================================================================
    // Raw boundary - untyped textual parameters
    // ========================================================================

    /// Add an offer from untyped textual parameters.
    ///
    /// This is the entry point for input that arrives as text (a feed, a
    /// CLI). The full runtime validation chain runs in a fixed order, so
    /// a multiply-invalid call always reports the same error:
    ///
    /// 1. `price` parses as a decimal number, else
    ///    [`BookError::InvalidParamType`]
    /// 2. `quantity` parses as an integer, else
    ///    [`BookError::InvalidParamType`]
    /// 3. `price` is positive (and representable at 10^-8 resolution),
    ///    else [`BookError::InvalidParamValue`]
    /// 4. `quantity` is positive, else [`BookError::InvalidParamValue`]
    /// 5. `side` is `"asks"` or `"bids"`, else
    ///    [`BookError::InvalidParamValue`]
    /// 6. the targeted side is below depth, else
    ///    [`BookError::SideOverflow`]
    ///
    /// # Example
    ///
    /// ```
    /// use depthbook::OrderBook;
    ///
    /// let mut book = OrderBook::default();
    ///
    /// let id = book.add_offer_raw("asks", "1.25", "3").unwrap();
    /// assert_eq!(book.get_offer(id).unwrap().price, 125_000_000);
    ///
    /// assert!(book.add_offer_raw("foo", "1.25", "3").is_err());
    /// ```
    pub fn add_offer_raw(&mut self, side: &str, price: &str, quantity: &str) -> Result<OfferId, BookError> {
        // Type checks outrank everything else.
        let price_decimal = Decimal::from_str(price.trim()).map_err(|_| BookError::InvalidParamType {
            name: "price",
            expected: "a decimal number",
            value: price.to_string(),
        })?;

        let quantity_int: i64 = quantity.trim().parse().map_err(|_| BookError::InvalidParamType {
            name: "quantity",
            expected: "an integer",
            value: quantity.to_string(),
        })?;

        // Value checks, price before quantity.
        if price_decimal <= Decimal::ZERO {
            return Err(BookError::InvalidParamValue {
                name: "price",
                value: price.to_string(),
            });
        }

        let price_fixed = price::decimal_to_fixed(price_decimal)
            .filter(|&fixed| fixed > 0)
            .ok_or_else(|| BookError::InvalidParamValue {
                name: "price",
                value: price.to_string(),
            })?;

        if quantity_int <= 0 {
            return Err(BookError::InvalidParamValue {
                name: "quantity",
                value: quantity.to_string(),
            });
        }

        // Side token, then the capacity check inside the typed call.
        let side = Side::from_token(side).ok_or_else(|| BookError::InvalidParamValue {
            name: "side",
            value: side.to_string(),
        })?;

        self.add_offer(side, price_fixed, quantity_int as u64)
    }

    /// [`OrderBook::purge_offer`] with a textual id.
    ///
    /// # Errors
    ///
    /// [`BookError::InvalidParamType`] when `id` does not parse as an
    /// unsigned integer, otherwise as [`OrderBook::purge_offer`].
    pub fn purge_offer_raw(&mut self, id: &str) -> Result<Offer, BookError> {
        self.purge_offer(parse_offer_id(id)?)
    }

    /// [`OrderBook::get_offer`] with a textual id.
    ///
    /// # Errors
    ///
    /// [`BookError::InvalidParamType`] when `id` does not parse as an
    /// unsigned integer, otherwise as [`OrderBook::get_offer`].
    pub fn get_offer_raw(&self, id: &str) -> Result<Offer, BookError> {
        self.get_offer(parse_offer_id(id)?)
    }

    // ========================================================================
    // Side selection
    // ========================================================================

    #[inline]
    fn side(&self, side: Side) -> &SideBook {
        match side {
            Side::Ask => &self.asks,
            Side::Bid => &self.bids,
        }
    }

    #[inline]
    fn side_mut(&mut self, side: Side) -> &mut SideBook {
        match side {
            Side::Ask => &mut self.asks,
            Side::Bid => &mut self.bids,
        }
    }
}

/// Offer ids are unsigned handles; anything that does not parse as one
/// is a type error.
fn parse_offer_id(id: &str) -> Result<OfferId, BookError> {
    id.trim().parse().map_err(|_| BookError::InvalidParamType {
        name: "id",
        expected: "an unsigned integer",
        value: id.to_string(),
    })
}

// ============================================================================
// Unit Tests
// ============================================================================
