use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::tag::Tag;

/// Domain representation of a product held in inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub product_name: String,
    /// Unit price in the store currency.
    pub price: f64,
    /// Units currently in stock.
    pub stock: i32,
    /// Owning category, when the product is filed under one.
    pub category_id: Option<i32>,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub product_name: String,
    /// Unit price in the store currency.
    pub price: f64,
    /// Initial stock level; the schema default applies when absent.
    pub stock: Option<i32>,
    /// Optional owning category.
    pub category_id: Option<i32>,
}

impl NewProduct {
    /// Build a new product payload with the supplied name and price.
    pub fn new(product_name: impl Into<String>, price: f64) -> Self {
        Self {
            product_name: product_name.into(),
            price,
            stock: None,
            category_id: None,
        }
    }

    /// Set the initial stock level.
    pub fn with_stock(mut self, stock: i32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// File the product under a category.
    pub fn with_category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Patch data applied when updating an existing product.
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    /// Optional name update.
    pub product_name: Option<String>,
    /// Optional price update.
    pub price: Option<f64>,
    /// Optional stock update.
    pub stock: Option<i32>,
    /// Optional category update, using inner `None` to clear the category.
    pub category_id: Option<Option<i32>>,
}

impl UpdateProduct {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the product name.
    pub fn product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = Some(product_name.into());
        self
    }

    /// Update the product price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Update the stock level.
    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Move the product to a category, using `None` to detach it.
    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Returns `true` when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.product_name.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.category_id.is_none()
    }
}

/// A product together with its eagerly loaded category and tags.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetails {
    #[serde(flatten)]
    pub product: Product,
    /// Owning category record, when `category_id` is set and still resolves.
    pub category: Option<Category>,
    /// Tags attached through the join table.
    pub tags: Vec<Tag>,
}
