//! # Cart Input
//!
//! Where the demo cart's items come from: the built-in sample set, or a JSON
//! file of the same shape.
//!
//! ## File Format
//! ```json
//! [
//!   { "title": "Apple", "price": "0.99", "quantity": 5, "category": "NEW" },
//!   { "title": "Nails", "price": "$2.00", "quantity": 500, "category": "REGULAR" }
//! ]
//! ```
//!
//! Prices are strings so they go straight to integer cents, never through a
//! float.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use shopcart_core::{Cart, Category, CoreError, Money};
use tracing::info;

/// One entry of an items file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemSpec {
    pub title: String,
    pub price: String,
    pub quantity: i64,
    pub category: Category,
}

impl ItemSpec {
    fn new(title: &str, price: &str, quantity: i64, category: Category) -> Self {
        ItemSpec {
            title: title.to_string(),
            price: price.to_string(),
            quantity,
            category,
        }
    }
}

/// Errors while loading or applying an items file.
#[derive(Debug, thiserror::Error)]
pub enum ItemsError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// `index` is 1-based, matching the ticket's `#` column.
    #[error("Item #{index}: {source}")]
    Item { index: usize, source: CoreError },
}

/// The fixed demonstration cart.
pub fn sample_items() -> Vec<ItemSpec> {
    vec![
        ItemSpec::new("Apple", "0.99", 5, Category::New),
        ItemSpec::new("Banana", "20.00", 4, Category::SecondFree),
        ItemSpec::new("A long piece of toilet paper", "17.20", 1, Category::Sale),
        ItemSpec::new("Nails", "2.00", 500, Category::Regular),
    ]
}

/// Reads an items file.
pub fn load_items(path: &Path) -> Result<Vec<ItemSpec>, ItemsError> {
    let text = fs::read_to_string(path).map_err(|source| ItemsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let items: Vec<ItemSpec> =
        serde_json::from_str(&text).map_err(|source| ItemsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), count = items.len(), "Loaded items file");
    Ok(items)
}

/// Builds a cart, stopping at the first item that doesn't parse or validate.
pub fn build_cart(specs: &[ItemSpec]) -> Result<Cart, ItemsError> {
    let mut cart = Cart::new();

    for (i, spec) in specs.iter().enumerate() {
        add_spec(&mut cart, spec).map_err(|source| ItemsError::Item {
            index: i + 1,
            source,
        })?;
    }

    Ok(cart)
}

fn add_spec(cart: &mut Cart, spec: &ItemSpec) -> Result<(), CoreError> {
    let price: Money = spec.price.parse()?;
    cart.add_item(spec.title.as_str(), price, spec.quantity, spec.category)?;
    Ok(())
}
