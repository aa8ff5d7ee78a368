use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::Category as DomainCategory;
use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductDetails,
    UpdateProduct as DomainUpdateProduct,
};
use crate::domain::tag::Tag as DomainTag;
use crate::models::category::Category as DbCategory;
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
};
use crate::models::product_tag::ProductTag as DbProductTag;
use crate::models::tag::Tag as DbTag;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProductReader, ProductWriter};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<ProductDetails>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let Some(db_product) = product else {
            return Ok(None);
        };

        let mut details = load_details(&mut conn, vec![db_product])?;
        Ok(details.pop())
    }

    fn list_products(&self) -> RepositoryResult<Vec<ProductDetails>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_products = products::table
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?;

        load_details(&mut conn, db_products)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let insertable = DbNewProduct::from(new_product);

        let created = diesel::insert_into(products::table)
            .values(&insertable)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<usize> {
        use crate::schema::products;

        // An empty changeset cannot be built into an UPDATE statement;
        // it also cannot touch any rows.
        if updates.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;
        let db_updates = DbUpdateProduct::from(updates);

        let target = products::table.filter(products::id.eq(product_id));
        let affected = diesel::update(target).set(&db_updates).execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let target = products::table.filter(products::id.eq(product_id));
        let deleted = diesel::delete(target).execute(&mut conn)?;

        Ok(deleted)
    }
}

/// Attach each product's category and tags, preserving product order.
fn load_details(
    conn: &mut SqliteConnection,
    db_products: Vec<DbProduct>,
) -> RepositoryResult<Vec<ProductDetails>> {
    use crate::schema::{categories, product_tags, tags};

    if db_products.is_empty() {
        return Ok(Vec::new());
    }

    let category_ids: Vec<i32> = db_products
        .iter()
        .filter_map(|product| product.category_id)
        .collect();

    let category_map: HashMap<i32, DomainCategory> = if category_ids.is_empty() {
        HashMap::new()
    } else {
        categories::table
            .filter(categories::id.eq_any(&category_ids))
            .load::<DbCategory>(conn)?
            .into_iter()
            .map(|category| (category.id, category.into()))
            .collect()
    };

    let product_ids: Vec<i32> = db_products.iter().map(|product| product.id).collect();
    let joined = product_tags::table
        .inner_join(tags::table)
        .filter(product_tags::product_id.eq_any(&product_ids))
        .order(product_tags::id.asc())
        .load::<(DbProductTag, DbTag)>(conn)?;

    let mut tag_map: HashMap<i32, Vec<DomainTag>> = HashMap::new();
    for (link, tag) in joined {
        tag_map.entry(link.product_id).or_default().push(tag.into());
    }

    let details = db_products
        .into_iter()
        .map(|db_product| {
            let product: DomainProduct = db_product.into();
            let category = product
                .category_id
                .and_then(|category_id| category_map.get(&category_id).cloned());
            let tags = tag_map.remove(&product.id).unwrap_or_default();
            ProductDetails {
                product,
                category,
                tags,
            }
        })
        .collect();

    Ok(details)
}
