//! depthbook - Demo Binary
//!
//! Walks the public API: build a book, rest offers on both sides, print
//! the sorted snapshot, purge an offer.

use depthbook::types::price;
use depthbook::{OrderBook, Side};

fn main() {
    tracing_subscriber::fmt().init();

    println!("===========================================");
    println!("  depthbook - bounded order book registry");
    println!("===========================================");
    println!();

    let mut book = OrderBook::default();
    println!("New book with depth {} per side", book.depth());
    println!();

    let offers = [
        (Side::Ask, "50.0", 1),
        (Side::Ask, "10.0", 3),
        (Side::Ask, "30.5", 2),
        (Side::Bid, "9.25", 5),
        (Side::Bid, "8.0", 1),
    ];

    println!("Adding offers...");
    let mut last_id = 0;
    for (side, price, quantity) in offers {
        let fixed = match price::to_fixed(price) {
            Some(fixed) => fixed,
            None => {
                eprintln!("  ERROR: unparseable price {}", price);
                continue;
            }
        };

        match book.add_offer(side, fixed, quantity) {
            Ok(id) => {
                last_id = id;
                println!("  #{} {} {} x {}", id, side, price, quantity);
            }
            Err(e) => eprintln!("  ERROR: {}", e),
        }
    }
    println!();

    let snapshot = book.market_snapshot();
    println!("Market snapshot ({} asks / {} bids):", snapshot.asks.len(), snapshot.bids.len());
    println!("  asks:");
    for offer in &snapshot.asks {
        println!("    {}", offer);
    }
    println!("  bids:");
    for offer in &snapshot.bids {
        println!("    {}", offer);
    }
    if let Some(spread) = snapshot.spread() {
        println!("  spread: {}", price::from_fixed_trimmed(spread));
    }
    println!();

    match book.purge_offer(last_id) {
        Ok(offer) => println!("Purged #{}: {}", last_id, offer),
        Err(e) => eprintln!("ERROR: {}", e),
    }
    println!(
        "Book now holds {} asks / {} bids; next id is {}",
        book.ask_count(),
        book.bid_count(),
        book.next_offer_id()
    );
}
