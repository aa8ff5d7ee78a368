use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::payloads::{NAME_MAX_LEN, double_option};

/// JSON body accepted by `POST /api/products`.
///
/// `tagIds`, when present and non-empty, lists the tags to attach to the
/// created product through the join table.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductPayload {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub product_name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    pub category_id: Option<i32>,
    #[serde(rename = "tagIds")]
    pub tag_ids: Option<Vec<i32>>,
}

impl CreateProductPayload {
    /// Validates the payload into a domain `NewProduct` plus the requested
    /// tag ids.
    pub fn into_parts(self) -> Result<(NewProduct, Option<Vec<i32>>), ValidationErrors> {
        self.validate()?;

        let Self {
            product_name,
            price,
            stock,
            category_id,
            tag_ids,
        } = self;

        let mut new_product = NewProduct::new(product_name, price);
        if let Some(stock) = stock {
            new_product = new_product.with_stock(stock);
        }
        if let Some(category_id) = category_id {
            new_product = new_product.with_category(category_id);
        }

        Ok((new_product, tag_ids))
    }
}

/// JSON body accepted by `PUT /api/products/{id}`. Every field is optional;
/// `tagIds`, when present, drives tag reconciliation.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProductPayload {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub product_name: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    /// Missing key leaves the category untouched; an explicit `null`
    /// detaches the product from its category.
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<i32>>,
    #[serde(rename = "tagIds")]
    pub tag_ids: Option<Vec<i32>>,
}

impl UpdateProductPayload {
    /// Validates the payload into a domain `UpdateProduct` patch plus the
    /// requested tag ids.
    pub fn into_parts(self) -> Result<(UpdateProduct, Option<Vec<i32>>), ValidationErrors> {
        self.validate()?;

        let Self {
            product_name,
            price,
            stock,
            category_id,
            tag_ids,
        } = self;

        let mut updates = UpdateProduct::new();
        if let Some(product_name) = product_name {
            updates = updates.product_name(product_name);
        }
        if let Some(price) = price {
            updates = updates.price(price);
        }
        if let Some(stock) = stock {
            updates = updates.stock(stock);
        }
        if let Some(category_id) = category_id {
            updates = updates.category_id(category_id);
        }

        Ok((updates, tag_ids))
    }
}
