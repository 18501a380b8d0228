//! # Cart
//!
//! The shopping cart: an ordered list of validated items.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Caller                   Cart method             Effect                │
//! │  ──────                   ───────────             ──────                │
//! │                                                                         │
//! │  new cart ───────────────► Cart::new() ─────────► items = []           │
//! │                                                                         │
//! │  add line ───────────────► add_item() ──────────► validate, push       │
//! │                                                                         │
//! │  print receipt ──────────► format_ticket() ─────► (read only) String   │
//! │                                                                         │
//! │  NOTE: Items are never edited or removed. Drop the cart to start over. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! `Cart` is a plain value with no interior mutability. `add_item` takes
//! `&mut self`, so the borrow checker already serializes mutation; share a
//! cart across threads by wrapping it in a `Mutex` at the call site.

use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::money::Money;
use crate::ticket;
use crate::types::{Category, Item, TicketLine, TicketSummary};
use crate::validation::validate_item;

/// The shopping cart.
///
/// ## Invariants
/// - Items keep insertion order (it drives the `#` column)
/// - Every stored item passed [`validate_item`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Validates and appends an item.
    ///
    /// ## Validation Order
    /// 1. title empty or over 32 chars → [`ValidationError::InvalidTitle`]
    /// 2. price under $.01 → [`ValidationError::InvalidPrice`]
    /// 3. quantity <= 0 → [`ValidationError::InvalidQuantity`]
    ///
    /// Only the first failure is reported; the cart is unchanged on error.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Cart, Category, Money, ValidationError};
    ///
    /// let mut cart = Cart::new();
    /// assert!(cart.add_item("Apple", Money::from_cents(99), 5, Category::New).is_ok());
    ///
    /// let err = cart
    ///     .add_item("Apple", Money::zero(), 5, Category::New)
    ///     .unwrap_err();
    /// assert_eq!(err, ValidationError::InvalidPrice);
    /// assert_eq!(err.to_string(), "Illegal price");
    /// assert_eq!(cart.len(), 1);
    /// ```
    pub fn add_item(
        &mut self,
        title: impl Into<String>,
        unit_price: Money,
        quantity: i64,
        category: Category,
    ) -> Result<(), ValidationError> {
        let title = title.into();

        if let Err(err) = validate_item(&title, unit_price, quantity) {
            warn!(field = err.field(), error = %err, "Rejected cart item");
            return Err(err);
        }

        debug!(
            title = %title,
            unit_price = %unit_price,
            quantity,
            category = %category,
            "Item added to cart"
        );
        let item = Item::new(title, unit_price, quantity, category);
        self.items.push(item);
        Ok(())
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Priced lines, one per item.
    pub fn lines(&self) -> Vec<TicketLine> {
        self.summary().lines
    }

    /// Priced lines plus the ticket total.
    pub fn summary(&self) -> TicketSummary {
        ticket::summarize(&self.items)
    }

    /// Renders the receipt.
    ///
    /// Returns `"No items."` for an empty cart, otherwise the column-aligned
    /// table described in [`crate::table`], with the item count and grand
    /// total in the footer.
    pub fn format_ticket(&self) -> String {
        ticket::render_ticket(&self.items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Amount;
    use crate::table::{Alignment, TextTable};

    fn add(cart: &mut Cart, title: &str, cents: i64, quantity: i64, category: Category) {
        let result = cart.add_item(title, Money::from_cents(cents), quantity, category);
        assert_eq!(result, Ok(()), "{title:?}");
    }

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        add(&mut cart, "Apple", 99, 5, Category::New);
        add(&mut cart, "Banana", 2000, 4, Category::SecondFree);
        add(&mut cart, "A long piece of toilet paper", 1720, 1, Category::Sale);
        add(&mut cart, "Nails", 200, 500, Category::Regular);
        cart
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.format_ticket(), "No items.");
        assert!(cart.summary().total.is_zero());
    }

    #[test]
    fn test_rejects_empty_title() {
        let mut cart = Cart::new();
        let err = cart
            .add_item("", Money::from_cents(99), 5, Category::New)
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidTitle);
        assert_eq!(err.to_string(), "Illegal title");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_rejects_long_title() {
        let mut cart = Cart::new();
        let err = cart
            .add_item("A".repeat(33), Money::from_cents(99), 5, Category::New)
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidTitle);
    }

    #[test]
    fn test_rejects_zero_price() {
        let mut cart = Cart::new();
        let err = cart
            .add_item("Apple", Money::zero(), 5, Category::New)
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidPrice);
        assert_eq!(err.to_string(), "Illegal price");
    }

    #[test]
    fn test_rejects_zero_quantity() {
        let mut cart = Cart::new();
        let err = cart
            .add_item("Apple", Money::from_cents(99), 0, Category::New)
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidQuantity);
        assert_eq!(err.to_string(), "Illegal quantity");
    }

    #[test]
    fn test_failed_add_leaves_cart_unchanged() {
        let mut cart = sample_cart();
        let before = cart.clone();
        assert!(cart
            .add_item("Bolts", Money::from_cents(10), -3, Category::Regular)
            .is_err());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_second_free_discount() {
        let mut cart = Cart::new();
        add(&mut cart, "Banana", 2000, 4, Category::SecondFree);
        let ticket = cart.format_ticket();
        assert!(ticket.contains("50%"));
        assert!(ticket.contains("$40.00"));
    }

    #[test]
    fn test_sale_discount() {
        let mut cart = Cart::new();
        add(&mut cart, "Toilet Paper", 1000, 2, Category::Sale);
        let ticket = cart.format_ticket();
        assert!(ticket.contains("70%"));
        assert!(ticket.contains("$6.00"));
    }

    #[test]
    fn test_small_quantity_bonus_for_regular() {
        let mut cart = Cart::new();
        add(&mut cart, "Nails", 200, 20, Category::Regular);
        let ticket = cart.format_ticket();
        assert!(ticket.contains("2%"));
        assert!(ticket.contains("$39.20"));
    }

    #[test]
    fn test_max_discount_for_large_regular_quantity() {
        let mut cart = Cart::new();
        add(&mut cart, "Nails", 200, 1000, Category::Regular);
        let ticket = cart.format_ticket();
        assert!(ticket.contains("80%"));
        assert!(ticket.contains("$400.00"));
    }

    #[test]
    fn test_max_quantity_ticket() {
        let mut cart = Cart::new();
        add(&mut cart, "X", 200, i64::MAX, Category::Regular);

        // 20% of $2.00 × (2^63 - 1)
        let ticket = cart.format_ticket();
        let rows: Vec<&str> = ticket.lines().collect();
        assert_eq!(rows.len(), 5);
        assert!(rows[2].contains(" 9223372036854775807 "));
        assert!(rows[2].contains(" 80% "));
        assert!(rows[2].ends_with(" $3689348814741910322.80 "));
        assert!(rows[4].ends_with(" $3689348814741910322.80 "));
    }

    #[test]
    fn test_several_large_lines_total() {
        let mut cart = Cart::new();
        for title in ["Gold", "Silver", "Bronze"] {
            add(&mut cart, title, 10_000_000_000, 1_000_000_000_000, Category::Regular);
        }

        // Each line: 10^22 cents at 80% off
        let summary = cart.summary();
        assert_eq!(summary.lines[0].line_total, Amount::from_cents(2 * 10u128.pow(21)));
        assert_eq!(summary.total, Amount::from_cents(6 * 10u128.pow(21)));
        assert!(cart.format_ticket().ends_with(" $60000000000000000000.00 "));
    }

    #[test]
    fn test_sample_ticket() {
        let expected = [
            "# Item                          Price Quan. Discount   Total ",
            "------------------------------------------------------------",
            "1 Apple                          $.99     5        -   $4.95 ",
            "------------------------------------------------------------",
            "2 Banana                       $20.00     4      50%  $40.00 ",
            "------------------------------------------------------------",
            "3 A long piece of toilet paper $17.20     1      70%   $5.16 ",
            "------------------------------------------------------------",
            "4 Nails                         $2.00   500      50% $500.00 ",
            "------------------------------------------------------------",
            "4                                                    $550.11 ",
        ]
        .join("\n");

        assert_eq!(sample_cart().format_ticket(), expected);
    }

    #[test]
    fn test_summary_matches_ticket() {
        let cart = sample_cart();
        let summary = cart.summary();

        assert_eq!(summary.item_count, 4);
        assert_eq!(summary.total, Amount::from_cents(55011));
        assert_eq!(cart.lines(), summary.lines);

        let discounts: Vec<u32> = summary.lines.iter().map(|l| l.discount_percent).collect();
        assert_eq!(discounts, vec![0, 50, 70, 50]);
    }

    #[test]
    fn test_column_widths_are_max_cell_length() {
        let ticket = sample_cart().format_ticket();
        let widths = TextTable::new()
            .header(["#", "Item", "Price", "Quan.", "Discount", "Total"])
            .alignments(&[Alignment::Left; 6])
            .rows(cart_cells(&sample_cart()))
            .footer(["4", "", "", "", "", "$550.11"])
            .column_widths();
        assert_eq!(widths, vec![1, 28, 6, 5, 8, 7]);

        // Every rendered line is exactly the widths plus one space per column
        let row_len: usize = widths.iter().sum::<usize>() + widths.len();
        for line in ticket.lines().filter(|l| !l.starts_with('-')) {
            assert_eq!(line.chars().count(), row_len, "{line:?}");
        }
        for line in ticket.lines().filter(|l| l.starts_with('-')) {
            assert_eq!(line.len(), row_len - 1);
        }
    }

    fn cart_cells(cart: &Cart) -> Vec<Vec<String>> {
        cart.lines()
            .iter()
            .map(|l| {
                vec![
                    l.index.to_string(),
                    l.title.clone(),
                    l.unit_price.to_string(),
                    l.quantity.to_string(),
                    ticket::discount_label(l.discount_percent),
                    l.line_total.to_string(),
                ]
            })
            .collect()
    }

    #[test]
    fn test_items_are_kept_in_order() {
        let cart = sample_cart();
        let titles: Vec<&str> = cart.items().iter().map(Item::title).collect();
        assert_eq!(
            titles,
            vec!["Apple", "Banana", "A long piece of toilet paper", "Nails"]
        );
        assert_eq!(cart.len(), 4);
    }
}
