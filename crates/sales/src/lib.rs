//! Sales orders domain module.
//!
//! This crate contains business rules for orders and revenue, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod order;

pub use order::{LineItem, Order, OrderBook, OrderId};
