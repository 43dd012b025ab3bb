//! Inventory domain module.
//!
//! This crate contains business rules for FIFO stock consumption, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod ledger;

pub use ledger::{InventoryLedger, StockBatch};
