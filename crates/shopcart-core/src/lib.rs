//! # shopcart-core: Pure Cart Logic
//!
//! This crate is the whole of the shopping cart. It accepts line items,
//! works out a per-item discount from the item's category and quantity, and
//! renders a column-aligned receipt ("ticket") as a `String`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopcart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/shopcart-cli                            │   │
//! │  │    config (env) ──► sample / items file ──► print ticket        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopcart-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  money   │ │ discount │ │  table   │ │ cart / ticket    │  │   │
//! │  │   │  Money   │ │ Category │ │ TextTable│ │ add_item         │  │   │
//! │  │   │  $.30    │ │ 0..=80 % │ │ Alignment│ │ format_ticket    │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO STDOUT • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The `Cart` and its two operations, `add_item` / `format_ticket`
//! - [`discount`] - Category discount rules
//! - [`money`] - Money and Amount types with integer arithmetic (no floating point!)
//! - [`table`] - Fixed-width text table layout
//! - [`ticket`] - Turns cart items into ticket rows and the rendered receipt
//! - [`types`] - Domain types (Category, Item, ticket DTOs)
//! - [`validation`] - Item validation rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopcart_core::{Cart, Category, Money};
//!
//! let mut cart = Cart::new();
//! cart.add_item("Banana", Money::from_cents(2000), 4, Category::SecondFree)
//!     .unwrap();
//!
//! let ticket = cart.format_ticket();
//! assert!(ticket.contains("50%"));
//! assert!(ticket.contains("$40.00"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod money;
pub mod table;
pub mod ticket;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopcart_core::Money` instead of
// `use shopcart_core::money::Money`

pub use cart::Cart;
pub use discount::calculate_discount;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Amount, Money};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an item title, in characters.
pub const MAX_TITLE_LENGTH: usize = 32;

/// Smallest accepted unit price: one cent.
pub const MIN_UNIT_PRICE: Money = Money::from_cents(1);

/// Upper bound on any discount, in percent.
///
/// ## Business Reason
/// Bulk bonuses stack on top of category discounts; the cap stops a large
/// SALE order from being given away.
pub const MAX_DISCOUNT_PERCENT: u32 = 80;

/// Text returned by `format_ticket` for a cart with no items.
pub const EMPTY_TICKET: &str = "No items.";
