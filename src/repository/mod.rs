use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, CategoryWithProducts, NewCategory, UpdateCategory};
use crate::domain::product::{NewProduct, Product, ProductDetails, UpdateProduct};
use crate::domain::product_tag::{NewProductTag, ProductTag};
use crate::domain::tag::{NewTag, Tag, TagWithProducts, UpdateTag};
use crate::repository::errors::RepositoryResult;

pub mod errors;

pub mod category;
pub mod product;
pub mod product_tag;
pub mod tag;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over category records.
pub trait CategoryReader {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<CategoryWithProducts>>;
    fn list_categories(&self) -> RepositoryResult<Vec<CategoryWithProducts>>;
}

/// Write operations over category records.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    /// Returns the number of rows the patch touched.
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<usize>;
    /// Returns the number of rows removed.
    fn delete_category(&self, category_id: i32) -> RepositoryResult<usize>;
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<ProductDetails>>;
    fn list_products(&self) -> RepositoryResult<Vec<ProductDetails>>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    /// Returns the number of rows the patch touched.
    fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<usize>;
    /// Returns the number of rows removed.
    fn delete_product(&self, product_id: i32) -> RepositoryResult<usize>;
}

/// Read-only operations over tag records.
pub trait TagReader {
    fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<TagWithProducts>>;
    fn list_tags(&self) -> RepositoryResult<Vec<TagWithProducts>>;
}

/// Write operations over tag records.
pub trait TagWriter {
    fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
    /// Returns the number of rows the patch touched.
    fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<usize>;
    /// Returns the number of rows removed.
    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<usize>;
}

/// Read-only operations over product-tag associations.
pub trait ProductTagReader {
    fn list_product_tags(&self, product_id: i32) -> RepositoryResult<Vec<ProductTag>>;
}

/// Write operations over product-tag associations.
pub trait ProductTagWriter {
    /// Bulk-insert associations, returning the number of rows created.
    fn create_product_tags(&self, new_links: &[NewProductTag]) -> RepositoryResult<usize>;
    /// Remove associations by their own row ids, returning the number removed.
    fn delete_product_tags(&self, link_ids: &[i32]) -> RepositoryResult<usize>;
}
