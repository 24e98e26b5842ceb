//! Core data types for depthbook
//!
//! All prices use fixed-point representation (scaled by 10^8); no
//! floating point anywhere in the crate.
//!
//! ## Types
//!
//! - [`Offer`]: A resting offer (price, quantity)
//! - [`Side`]: Ask or Bid
//! - [`price`]: Fixed-point conversion utilities

mod offer;
mod side;
pub mod price;

// Re-export all types at module level
pub use offer::Offer;
pub use side::Side;
