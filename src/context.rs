//! Application Context
//!
//! Read-only data shared via Leptos Context API.

use leptos::prelude::*;

use crate::catalog;
use crate::models::Product;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct ShopContext {
    /// Product list, built once at mount and never mutated
    pub catalog: StoredValue<Vec<Product>>,
}

impl ShopContext {
    pub fn new() -> Self {
        Self {
            catalog: StoredValue::new(catalog::seed()),
        }
    }

    /// Products visible for `selection`, in catalog order
    pub fn visible(&self, selection: &str) -> Vec<Product> {
        self.catalog.with_value(|products| catalog::filter_by_category(products, selection))
    }

    pub fn product_count(&self) -> usize {
        self.catalog.with_value(Vec::len)
    }
}

pub fn use_shop_context() -> ShopContext {
    expect_context::<ShopContext>()
}
