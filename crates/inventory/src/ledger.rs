use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use tally_core::{DomainError, DomainResult};

/// A discrete lot of stock received at a single price.
///
/// Two batches are distinct lots even when their prices match; consumption
/// order is decided by arrival, not price.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockBatch {
    pub quantity: u64,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
}

/// FIFO inventory ledger: batches ordered by arrival, oldest at the front.
///
/// Withdrawals deplete the oldest batch before touching newer ones, splitting
/// a batch in place when only part of it is needed. Invariants:
/// - `available()` equals the sum of batch quantities,
/// - batches are never reordered, only consumed from the front,
/// - no batch with quantity 0 is ever held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryLedger {
    batches: VecDeque<StockBatch>,
}

impl InventoryLedger {
    /// Empty ledger with no stock on hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from batches already on hand, oldest first.
    pub fn from_batches<I>(batches: I) -> Self
    where
        I: IntoIterator<Item = StockBatch>,
    {
        let mut ledger = Self::new();
        for batch in batches {
            ledger.receive(batch);
        }
        ledger
    }

    /// Record a newly arrived batch behind all existing stock.
    ///
    /// Empty batches are dropped on entry; sufficiency at withdrawal time is
    /// the system's only error condition.
    pub fn receive(&mut self, batch: StockBatch) {
        if batch.quantity == 0 {
            return;
        }
        self.batches.push_back(batch);
    }

    /// Total units on hand across all batches.
    pub fn available(&self) -> u64 {
        self.batches.iter().map(|b| b.quantity).sum()
    }

    /// Batches in consumption order, oldest first.
    pub fn batches(&self) -> impl Iterator<Item = &StockBatch> {
        self.batches.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Consume `quantity` units from the oldest batches first.
    ///
    /// Returns the consumed lots oldest-price-first. A batch needed in full
    /// is removed and returned as-is; a batch needed only in part stays at
    /// the front with its quantity reduced, and the withdrawn part becomes
    /// the final returned lot.
    ///
    /// Sufficiency is validated before anything is mutated, so a failed
    /// withdrawal leaves the ledger exactly as it was. Requesting zero units
    /// returns an empty list without touching any batch.
    pub fn withdraw(&mut self, quantity: u64) -> DomainResult<Vec<StockBatch>> {
        let available = self.available();
        if quantity > available {
            return Err(DomainError::insufficient_stock(quantity, available));
        }

        let mut consumed = Vec::new();
        let mut remaining = quantity;
        while remaining > 0 {
            // The sufficiency check above guarantees a front batch exists.
            let Some(front) = self.batches.front_mut() else {
                break;
            };

            if front.quantity <= remaining {
                remaining -= front.quantity;
                let lot = *front;
                self.batches.pop_front();
                consumed.push(lot);
            } else {
                front.quantity -= remaining;
                consumed.push(StockBatch {
                    quantity: remaining,
                    unit_price: front.unit_price,
                });
                remaining = 0;
            }
        }

        Ok(consumed)
    }
}
