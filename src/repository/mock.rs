use mockall::mock;

use super::{
    CategoryReader, CategoryWriter, ProductReader, ProductTagReader, ProductTagWriter,
    ProductWriter, TagReader, TagWriter,
};
use crate::domain::{
    category::{Category, CategoryWithProducts, NewCategory, UpdateCategory},
    product::{NewProduct, Product, ProductDetails, UpdateProduct},
    product_tag::{NewProductTag, ProductTag},
    tag::{NewTag, Tag, TagWithProducts, UpdateTag},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<CategoryWithProducts>>;
        fn list_categories(&self) -> RepositoryResult<Vec<CategoryWithProducts>>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(&self, category_id: i32, updates: &UpdateCategory) -> RepositoryResult<usize>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<usize>;
    }
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<ProductDetails>>;
        fn list_products(&self) -> RepositoryResult<Vec<ProductDetails>>;
    }
}

// Product writes and product-tag reconciliation run against the same
// repository, so one mock implements all three traits.
mock! {
    pub ProductStore {}

    impl ProductWriter for ProductStore {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<usize>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<usize>;
    }

    impl ProductTagReader for ProductStore {
        fn list_product_tags(&self, product_id: i32) -> RepositoryResult<Vec<ProductTag>>;
    }

    impl ProductTagWriter for ProductStore {
        fn create_product_tags(&self, new_links: &[NewProductTag]) -> RepositoryResult<usize>;
        fn delete_product_tags(&self, link_ids: &[i32]) -> RepositoryResult<usize>;
    }
}

mock! {
    pub TagReader {}

    impl TagReader for TagReader {
        fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<TagWithProducts>>;
        fn list_tags(&self) -> RepositoryResult<Vec<TagWithProducts>>;
    }
}

mock! {
    pub TagWriter {}

    impl TagWriter for TagWriter {
        fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
        fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<usize>;
        fn delete_tag(&self, tag_id: i32) -> RepositoryResult<usize>;
    }
}
