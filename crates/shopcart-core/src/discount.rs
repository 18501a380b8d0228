//! # Discount Rules
//!
//! Maps an item's category and quantity to a whole-percent discount.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate_discount(category, quantity)                                 │
//! │                                                                         │
//! │  NEW ─────────────────────────────────────────────────────────► 0%     │
//! │                                                                         │
//! │  REGULAR      base  0%  ─┐                                              │
//! │  SECOND_FREE  base 50%  ─┼─► + quantity / 10 ─► min(.., 80) ──► 0..=80% │
//! │   (qty > 1, else 0%)     │                                              │
//! │  SALE         base 70%  ─┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::Category;
use crate::MAX_DISCOUNT_PERCENT;

/// Base discount for a `SecondFree` line with more than one unit.
pub const SECOND_FREE_PERCENT: u32 = 50;

/// Base discount for a `Sale` line.
pub const SALE_PERCENT: u32 = 70;

/// Every full step of this many units adds one percentage point.
pub const BULK_STEP: i64 = 10;

/// Calculates an item's discount in percent.
///
/// - `New`: always 0, the bulk bonus does not apply
/// - `Regular`: 0
/// - `SecondFree`: 50 if quantity > 1, else 0
/// - `Sale`: 70
/// - For every category but `New`, each full 10 units add 1 point, capped
///   at 80 in total
///
/// ## Example
/// ```rust
/// use shopcart_core::{calculate_discount, Category};
///
/// assert_eq!(calculate_discount(Category::New, 500), 0);
/// assert_eq!(calculate_discount(Category::Regular, 20), 2);
/// assert_eq!(calculate_discount(Category::SecondFree, 4), 50);
/// assert_eq!(calculate_discount(Category::Sale, 2), 70);
/// assert_eq!(calculate_discount(Category::Regular, 1000), 80);
/// ```
pub fn calculate_discount(category: Category, quantity: i64) -> u32 {
    let base = match category {
        Category::New => return 0,
        Category::Regular => 0,
        Category::SecondFree if quantity > 1 => SECOND_FREE_PERCENT,
        Category::SecondFree => 0,
        Category::Sale => SALE_PERCENT,
    };

    if base >= MAX_DISCOUNT_PERCENT {
        return base;
    }

    // Quantities are validated positive; clamp keeps the cast total anyway.
    let bulk = (quantity / BULK_STEP).clamp(0, MAX_DISCOUNT_PERCENT as i64) as u32;
    (base + bulk).min(MAX_DISCOUNT_PERCENT)
}

// =============================================================================
// Unit Tests
// =============================================================================
