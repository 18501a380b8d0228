//! # Error Types
//!
//! Domain-specific error types for shopcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopcart-core errors (this file)                                      │
//! │  ├── CoreError        - Parse failures, wraps ValidationError          │
//! │  └── ValidationError  - Rejected add_item input                        │
//! │                                                                         │
//! │  shopcart-cli errors (app)                                             │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow (CLI top level)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Validation messages are fixed text; callers match on the variant

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core errors.
///
/// Raised when caller-supplied text (an amount, a category name) can't be
/// turned into a domain value, or when an item fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A money amount could not be parsed.
    ///
    /// ## When This Occurs
    /// - Items file contains `"price": "12,50"` or `"price": "abc"`
    /// - More than two fraction digits (`"0.999"`)
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },

    /// Category name is not one of NEW, REGULAR, SECOND_FREE, SALE.
    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Item validation errors.
///
/// Checked in declaration order by [`crate::validation::validate_item`];
/// only the first violated rule is reported.
///
/// ## User Workflow
/// ```text
/// add_item("", $0.99, 5, NEW)
///      │
///      ▼
/// title empty? ──yes──► InvalidTitle    "Illegal title"
///      │ no
///      ▼
/// price < $.01? ─yes──► InvalidPrice    "Illegal price"
///      │ no
///      ▼
/// quantity <= 0? ─yes─► InvalidQuantity "Illegal quantity"
///      │ no
///      ▼
/// item appended
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty or longer than 32 characters.
    #[error("Illegal title")]
    InvalidTitle,

    /// Unit price is below one cent.
    #[error("Illegal price")]
    InvalidPrice,

    /// Quantity is zero or negative.
    #[error("Illegal quantity")]
    InvalidQuantity,
}

impl ValidationError {
    /// Name of the rejected field, for log events.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidTitle => "title",
            ValidationError::InvalidPrice => "price",
            ValidationError::InvalidQuantity => "quantity",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
