//! The cart engine: line bookkeeping and derived totals.
//!
//! A [`Cart`] is the single source of truth for the current order.
//! Lines keep insertion order, hold at most one entry per menu item,
//! and snapshot the item's name and unit price at the moment it is
//! added. Every total is recomputed from the lines on read - nothing
//! derived is ever cached, so totals cannot drift.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::menu::MenuItem;
use crate::types::{MenuItemId, OrderId, Price};

/// Flat sales tax applied at checkout display time (10%).
fn tax_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// One distinct menu item and its requested quantity within an order.
///
/// `name` and `unit_price` are snapshots taken when the item was first
/// added; later catalog changes do not affect lines already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: MenuItemId,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
}

impl CartLine {
    /// Exact `unit_price * quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.times(self.quantity)
    }
}

/// Receipt for a simulated checkout.
///
/// Carries the totals as they stood when the order was "placed". This
/// is a demo stand-in: a real payment integration would return a
/// processor reference and its own error taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub placed_at: DateTime<Utc>,
    /// Total item count across all lines (sum of quantities).
    pub items: u32,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// The current order's contents.
///
/// Invariants:
/// - every line has `quantity >= 1`; setting a quantity to zero or
///   below removes the line instead
/// - at most one line exists per distinct [`MenuItemId`]
/// - line order is insertion order; incrementing an existing line does
///   not reorder it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` of `item` to the cart. Never fails.
    ///
    /// A quantity of zero is clamped to one. If a line for the item
    /// already exists its quantity increments in place, saturating at
    /// `u32::MAX`; otherwise a new line appends at the end,
    /// snapshotting the item's name and price.
    pub fn add_item(&mut self, item: &MenuItem, quantity: u32) {
        let quantity = quantity.max(1);
        if let Some(line) = self.lines.iter_mut().find(|line| line.item_id == item.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine {
                item_id: item.id.clone(),
                name: item.name.clone(),
                unit_price: item.price,
                quantity,
            });
        }
    }

    /// Set the quantity of an existing line to `quantity` exactly.
    ///
    /// No-op if no line matches. A quantity of zero or below removes
    /// the line, with the same outcome as [`Cart::remove_item`].
    pub fn update_quantity(&mut self, item_id: &MenuItemId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(item_id);
            return;
        }
        // quantity is in 1..=i64::MAX here; saturate rather than wrap
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|line| &line.item_id == item_id) {
            line.quantity = quantity;
        }
    }

    /// Remove the matching line if present; silent no-op if absent.
    pub fn remove_item(&mut self, item_id: &MenuItemId) {
        self.lines.retain(|line| &line.item_id != item_id);
    }

    /// Empty the cart unconditionally. Idempotent.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities across all lines (badge count), not the
    /// number of distinct lines. Saturates at `u32::MAX`.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |total, line| total.saturating_add(line.quantity))
    }

    /// Exact sum of `unit_price * quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Flat 10% tax on the current subtotal.
    #[must_use]
    pub fn tax(&self) -> Decimal {
        self.subtotal() * tax_rate()
    }

    /// Subtotal plus tax.
    #[must_use]
    pub fn grand_total(&self) -> Decimal {
        let subtotal = self.subtotal();
        subtotal + subtotal * tax_rate()
    }

    /// Simulated checkout: capture the totals, clear the cart, and
    /// return a confirmation. Cannot fail.
    pub fn complete_checkout(&mut self) -> OrderConfirmation {
        let confirmation = OrderConfirmation {
            order_id: OrderId::generate(),
            placed_at: Utc::now(),
            items: self.total_items(),
            subtotal: self.subtotal(),
            tax: self.tax(),
            total: self.grand_total(),
        };
        self.clear();
        confirmation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::menu::{Category, MenuItem};

    fn item(id: &str, price: i64) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(id),
            name: format!("Dish {id}"),
            description: String::new(),
            price: Price::from_major(price),
            image: String::new(),
            category: Category::Mains,
            model_url: None,
            vegetarian: false,
            spicy: false,
            rating: None,
            prep_time: None,
            ingredients: Vec::new(),
            nutrition: None,
        }
    }

    #[test]
    fn add_default_quantity_creates_single_line() {
        // Scenario A: empty cart + one add at quantity 1
        let mut cart = Cart::new();
        cart.add_item(&item("1", 28), 1);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.subtotal(), Decimal::from(28));
    }

    #[test]
    fn adding_same_item_merges_into_one_line() {
        // Scenario B: second add of the same item increments, no duplicate
        let mut cart = Cart::new();
        let risotto = item("1", 28);
        cart.add_item(&risotto, 1);
        cart.add_item(&risotto, 1);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.subtotal(), Decimal::from(56));
    }

    #[test]
    fn update_quantity_sets_absolute_value() {
        // Scenario C
        let mut cart = Cart::new();
        cart.add_item(&item("1", 28), 2);
        cart.update_quantity(&MenuItemId::new("1"), 5);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.subtotal(), Decimal::from(140));
    }

    #[test]
    fn update_quantity_below_one_removes_line() {
        // Scenario D
        let mut cart = Cart::new();
        cart.add_item(&item("1", 28), 5);
        cart.update_quantity(&MenuItemId::new("1"), -1);

        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn tax_and_grand_total_on_round_subtotal() {
        // Scenario E: subtotal 100 -> tax 10.00, grand total 110.00
        let mut cart = Cart::new();
        cart.add_item(&item("1", 25), 4);

        assert_eq!(cart.subtotal(), Decimal::from(100));
        assert_eq!(cart.tax(), Decimal::from(10));
        assert_eq!(cart.grand_total(), Decimal::from(110));
    }

    #[test]
    fn repeated_adds_accumulate_quantity_in_one_line() {
        let mut cart = Cart::new();
        let dish = item("7", 10);
        for quantity in [1, 3, 2] {
            cart.add_item(&dish, quantity);
        }

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 6);
        assert_eq!(cart.total_items(), 6);
    }

    #[test]
    fn add_item_saturates_instead_of_wrapping() {
        let mut cart = Cart::new();
        let dish = item("1", 28);
        cart.add_item(&dish, u32::MAX);
        cart.add_item(&dish, 1);

        // still one line, still quantity >= 1, no wrap to zero
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
    }

    #[test]
    fn total_items_saturates_across_lines() {
        let mut cart = Cart::new();
        cart.add_item(&item("1", 28), u32::MAX);
        cart.add_item(&item("2", 32), 2);

        assert_eq!(cart.total_items(), u32::MAX);
    }

    #[test]
    fn zero_quantity_add_clamps_to_one() {
        let mut cart = Cart::new();
        cart.add_item(&item("1", 28), 0);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn total_items_counts_quantities_not_lines() {
        let mut cart = Cart::new();
        cart.add_item(&item("1", 28), 2);
        cart.add_item(&item("2", 32), 3);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.subtotal(), Decimal::from(152));
    }

    #[test]
    fn new_lines_append_and_increments_do_not_reorder() {
        let mut cart = Cart::new();
        let first = item("1", 28);
        cart.add_item(&first, 1);
        cart.add_item(&item("2", 32), 1);
        cart.add_item(&first, 1);
        cart.add_item(&item("3", 16), 1);

        let order: Vec<_> = cart
            .lines()
            .iter()
            .map(|line| line.item_id.as_str())
            .collect();
        assert_eq!(order, ["1", "2", "3"]);
    }

    #[test]
    fn update_to_zero_matches_remove_item() {
        let build = || {
            let mut cart = Cart::new();
            cart.add_item(&item("1", 28), 2);
            cart.add_item(&item("2", 32), 1);
            cart
        };

        let mut updated = build();
        updated.update_quantity(&MenuItemId::new("1"), 0);

        let mut removed = build();
        removed.remove_item(&MenuItemId::new("1"));

        assert_eq!(updated, removed);
    }

    #[test]
    fn update_and_remove_ignore_unknown_ids() {
        let mut cart = Cart::new();
        cart.add_item(&item("1", 28), 1);
        let before = cart.clone();

        cart.update_quantity(&MenuItemId::new("404"), 3);
        cart.remove_item(&MenuItemId::new("404"));

        assert_eq!(cart, before);
    }

    #[test]
    fn clear_is_idempotent_and_zeroes_accessors() {
        let mut cart = Cart::new();
        cart.add_item(&item("1", 28), 4);
        cart.clear();
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.subtotal(), Decimal::ZERO);
        assert_eq!(cart.tax(), Decimal::ZERO);
        assert_eq!(cart.grand_total(), Decimal::ZERO);
    }

    #[test]
    fn lines_snapshot_price_at_insertion() {
        let mut cart = Cart::new();
        let mut dish = item("1", 28);
        cart.add_item(&dish, 1);

        // catalog price changes after the fact do not touch the line
        dish.price = Price::from_major(99);
        cart.add_item(&dish, 1);

        assert_eq!(cart.lines()[0].unit_price, Price::from_major(28));
        assert_eq!(cart.subtotal(), Decimal::from(56));
    }

    #[test]
    fn checkout_captures_totals_then_clears() {
        let mut cart = Cart::new();
        cart.add_item(&item("1", 25), 4);

        let confirmation = cart.complete_checkout();

        assert_eq!(confirmation.items, 4);
        assert_eq!(confirmation.subtotal, Decimal::from(100));
        assert_eq!(confirmation.tax, Decimal::from(10));
        assert_eq!(confirmation.total, Decimal::from(110));
        assert!(cart.is_empty());
    }

    #[test]
    fn works_with_sample_catalog_entries() {
        let catalog = Catalog::sample();
        let risotto = catalog.get(&MenuItemId::new("1")).expect("sample item");

        let mut cart = Cart::new();
        cart.add_item(risotto, 2);

        assert_eq!(cart.lines()[0].name, "Truffle Mushroom Risotto");
        assert_eq!(cart.subtotal(), Decimal::from(56));
    }

    #[test]
    fn cart_line_serializes_with_snapshot_fields() {
        let mut cart = Cart::new();
        cart.add_item(&item("1", 28), 2);

        let json = serde_json::to_value(cart.lines()).expect("serialize");
        assert_eq!(json[0]["item_id"], "1");
        assert_eq!(json[0]["quantity"], 2);
        assert_eq!(json[0]["unit_price"], "28");
    }
}
