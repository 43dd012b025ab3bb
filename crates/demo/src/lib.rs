//! Walkthrough fixtures shared by the `tally-demo` binary and the scenario
//! tests.
//!
//! Each builder constructs one well-known dataset so the narrated run and the
//! end-to-end assertions always start from the same state.

use tally_enrollment::{CourseId, EnrollmentRegistry, StudentId};
use tally_inventory::{InventoryLedger, StockBatch};
use tally_sales::{LineItem, Order, OrderBook};

/// Ledger holding three batches, oldest first: 10 @ 5, 20 @ 6, 15 @ 7.
pub fn sample_ledger() -> InventoryLedger {
    InventoryLedger::from_batches([
        StockBatch {
            quantity: 10,
            unit_price: 5,
        },
        StockBatch {
            quantity: 20,
            unit_price: 6,
        },
        StockBatch {
            quantity: 15,
            unit_price: 7,
        },
    ])
}

/// Book of two orders whose lines total a revenue of 85.
pub fn sample_orders() -> OrderBook {
    let mut book = OrderBook::new();
    book.add_order(Order::new(vec![
        LineItem::new("widget", 2, 10),
        LineItem::new("gadget", 1, 15),
    ]));
    book.add_order(Order::new(vec![
        LineItem::new("widget", 1, 10),
        LineItem::new("doohickey", 2, 20),
    ]));
    book
}

/// Registry with alice in Math and Physics, and bob in Math.
pub fn sample_registry() -> EnrollmentRegistry {
    let mut registry = EnrollmentRegistry::new();
    registry.enroll(StudentId::new("alice"), CourseId::new("Math"));
    registry.enroll(StudentId::new("alice"), CourseId::new("Physics"));
    registry.enroll(StudentId::new("bob"), CourseId::new("Math"));
    registry
}
