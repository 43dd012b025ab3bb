use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for OrderId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<OrderId> for Uuid {
    fn from(value: OrderId) -> Self {
        value.0
    }
}

/// Order line: item name, quantity, unit price.
///
/// Quantities are signed so that returns and corrections can be recorded as
/// ordinary lines with a negative count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: i64,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: i64, unit_price: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Line total in smallest currency unit; negative for negative quantities.
    pub fn total(&self) -> i128 {
        self.quantity as i128 * self.unit_price as i128
    }
}

/// A placed order: identity, placement time and its line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<LineItem>,
}

impl Order {
    /// Order placed now with a fresh identifier.
    pub fn new(items: Vec<LineItem>) -> Self {
        Self {
            id: OrderId::new(),
            placed_at: Utc::now(),
            items,
        }
    }

    /// Sum of the line totals.
    pub fn total(&self) -> i128 {
        self.items.iter().map(LineItem::total).sum()
    }
}

/// Collects placed orders and reports revenue across all of them.
///
/// The book records whatever it is handed. It does not validate quantities or
/// prices; an order whose lines net out negative simply lowers the total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    /// Empty book with no orders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an order. Orders keep their insertion order.
    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Orders in the sequence they were added.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Revenue over every order in the book, in smallest currency unit.
    ///
    /// The sum of `quantity * unit_price` across all lines of all orders;
    /// zero for an empty book, negative when returns outweigh sales.
    pub fn total_revenue(&self) -> i128 {
        self.orders.iter().map(Order::total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(name: &str, quantity: i64, unit_price: u64) -> LineItem {
        LineItem::new(name, quantity, unit_price)
    }

    #[test]
    fn revenue_sums_quantity_times_price_across_orders() {
        let mut book = OrderBook::new();
        book.add_order(Order::new(vec![item("widget", 2, 10), item("gadget", 1, 15)]));
        book.add_order(Order::new(vec![item("widget", 1, 10), item("doohickey", 2, 20)]));

        // 2*10 + 1*15 + 1*10 + 2*20
        assert_eq!(book.total_revenue(), 85);
    }

    #[test]
    fn empty_book_has_zero_revenue() {
        let book = OrderBook::new();

        assert!(book.is_empty());
        assert_eq!(book.total_revenue(), 0);
    }

    #[test]
    fn negative_quantities_subtract_from_revenue() {
        let mut book = OrderBook::new();
        book.add_order(Order::new(vec![item("widget", 5, 10)]));
        book.add_order(Order::new(vec![item("widget", -3, 10)]));

        assert_eq!(book.total_revenue(), 20);

        // A book of nothing but returns goes negative.
        let mut returns = OrderBook::new();
        returns.add_order(Order::new(vec![item("gadget", -2, 15)]));
        assert_eq!(returns.total_revenue(), -30);
    }

    #[test]
    fn order_without_items_contributes_nothing() {
        let mut book = OrderBook::new();
        book.add_order(Order::new(vec![]));
        book.add_order(Order::new(vec![item("widget", 3, 7)]));

        assert_eq!(book.len(), 2);
        assert_eq!(book.total_revenue(), 21);
    }

    #[test]
    fn orders_keep_their_insertion_order() {
        let first = Order::new(vec![item("widget", 1, 10)]);
        let second = Order::new(vec![item("gadget", 2, 15)]);

        let mut book = OrderBook::new();
        book.add_order(first.clone());
        book.add_order(second.clone());

        assert_eq!(book.orders(), &[first, second]);
    }

    #[test]
    fn order_id_displays_as_its_uuid() {
        let uuid = Uuid::now_v7();
        let id = OrderId::from_uuid(uuid);

        assert_eq!(id.to_string(), uuid.to_string());
        assert_eq!(Uuid::from(id), uuid);
    }

    fn arb_line_item() -> impl Strategy<Value = LineItem> {
        ("[a-z]{1,12}", -1_000i64..=1_000, 0u64..=10_000)
            .prop_map(|(name, quantity, unit_price)| LineItem {
                name,
                quantity,
                unit_price,
            })
    }

    fn arb_order() -> impl Strategy<Value = Order> {
        prop::collection::vec(arb_line_item(), 0..8).prop_map(Order::new)
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: book revenue is the sum of the individual order totals.
        #[test]
        fn revenue_is_additive_over_orders(orders in prop::collection::vec(arb_order(), 0..12)) {
            let expected: i128 = orders.iter().map(Order::total).sum();

            let mut book = OrderBook::new();
            for order in orders {
                book.add_order(order);
            }

            prop_assert_eq!(book.total_revenue(), expected);
        }

        /// Property: adding one order moves revenue by exactly that order's
        /// total, regardless of what the book already holds.
        #[test]
        fn adding_an_order_shifts_revenue_by_its_total(
            existing in prop::collection::vec(arb_order(), 0..8),
            next in arb_order(),
        ) {
            let mut book = OrderBook::new();
            for order in existing {
                book.add_order(order);
            }
            let before = book.total_revenue();

            let delta = next.total();
            book.add_order(next);

            prop_assert_eq!(book.total_revenue(), before + delta);
        }

        /// Property: a book whose lines all have non-negative quantities never
        /// reports negative revenue.
        #[test]
        fn non_negative_quantities_yield_non_negative_revenue(
            orders in prop::collection::vec(
                prop::collection::vec(
                    ("[a-z]{1,12}", 0i64..=1_000, 0u64..=10_000).prop_map(
                        |(name, quantity, unit_price)| LineItem { name, quantity, unit_price },
                    ),
                    0..8,
                )
                .prop_map(Order::new),
                0..12,
            ),
        ) {
            let mut book = OrderBook::new();
            for order in orders {
                book.add_order(order);
            }

            prop_assert!(book.total_revenue() >= 0);
        }
    }
}
