//! # Domain Types
//!
//! Core domain types used throughout the cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Item        │   │   TicketLine    │   │  TicketSummary  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  title          │──►│  index (1-based)│──►│  lines          │       │
//! │  │  unit_price     │   │  discount %     │   │  item_count     │       │
//! │  │  quantity       │   │  line_total     │   │  total          │       │
//! │  │  category       │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │    Category     │  NEW • REGULAR • SECOND_FREE • SALE                │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Item` is owned by the cart and only built through validated insertion.
//! `TicketLine` and `TicketSummary` are plain data computed from the items,
//! for callers that want the numbers rather than the rendered text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::{Amount, Money};

// =============================================================================
// Category
// =============================================================================

/// The discount class of an item.
///
/// | Category      | Base discount                | Bulk bonus |
/// |---------------|------------------------------|------------|
/// | `New`         | 0%                           | never      |
/// | `Regular`     | 0%                           | yes        |
/// | `SecondFree`  | 50% when quantity > 1        | yes        |
/// | `Sale`        | 70%                          | yes        |
///
/// See [`crate::discount::calculate_discount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Newly listed items; never discounted.
    New,
    /// Ordinary items.
    Regular,
    /// Buy one, get the second free.
    SecondFree,
    /// Clearance items.
    Sale,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 4] = [
        Category::New,
        Category::Regular,
        Category::SecondFree,
        Category::Sale,
    ];

    /// The wire/display name (`NEW`, `REGULAR`, `SECOND_FREE`, `SALE`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::New => "NEW",
            Category::Regular => "REGULAR",
            Category::SecondFree => "SECOND_FREE",
            Category::Sale => "SALE",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; `-` is accepted in place of `_` (`second-free`).
impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| CoreError::InvalidCategory(s.to_string()))
    }
}

// =============================================================================
// Item
// =============================================================================

/// A line item in the cart.
///
/// ## Invariants
/// - `title` is 1 to 32 characters
/// - `unit_price` is at least $.01
/// - `quantity` is at least 1
///
/// Fields are private: the only way to get an `Item` is
/// [`crate::Cart::add_item`], which validates first, and nothing mutates an
/// item afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    title: String,
    unit_price: Money,
    quantity: i64,
    category: Category,
}

impl Item {
    /// Builds an item from already-validated parts.
    pub(crate) fn new(title: String, unit_price: Money, quantity: i64, category: Category) -> Self {
        Item {
            title,
            unit_price,
            quantity,
            category,
        }
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Price of one unit.
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Number of units.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Discount class.
    pub fn category(&self) -> Category {
        self.category
    }
}

// =============================================================================
// Ticket DTOs
// =============================================================================

/// One computed row of the ticket.
///
/// Amounts serialize as strings of cent digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TicketLine {
    /// 1-based position in the cart (the `#` column).
    pub index: usize,

    /// Item title as entered.
    pub title: String,

    /// Price of one unit.
    pub unit_price: Money,

    /// Number of units.
    pub quantity: i64,

    /// Discount in percent, 0 to 80.
    pub discount_percent: u32,

    /// `unit_price × quantity × (100 - discount) / 100`, rounded to the cent.
    #[ts(type = "string")]
    pub line_total: Amount,
}

/// The whole ticket as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    /// One entry per item, in insertion order.
    pub lines: Vec<TicketLine>,

    /// Number of lines (the footer's `#` cell).
    pub item_count: usize,

    /// Sum of the rounded line totals.
    #[ts(type = "string")]
    pub total: Amount,
}

// =============================================================================
// Unit Tests
// =============================================================================
