use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::{
    Category as DomainCategory, CategoryWithProducts, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};
use crate::domain::product::Product as DomainProduct;
use crate::models::category::{
    Category as DbCategory, NewCategory as DbNewCategory, UpdateCategory as DbUpdateCategory,
};
use crate::models::product::Product as DbProduct;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<CategoryWithProducts>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let category = categories::table
            .filter(categories::id.eq(id))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let Some(db_category) = category else {
            return Ok(None);
        };

        let category: DomainCategory = db_category.into();
        let mut product_map = load_products_for_categories(&mut conn, &[category.id])?;
        let products = product_map.remove(&category.id).unwrap_or_default();

        Ok(Some(CategoryWithProducts { category, products }))
    }

    fn list_categories(&self) -> RepositoryResult<Vec<CategoryWithProducts>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_categories = categories::table
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?;

        if db_categories.is_empty() {
            return Ok(Vec::new());
        }

        let category_ids: Vec<i32> = db_categories.iter().map(|category| category.id).collect();
        let mut product_map = load_products_for_categories(&mut conn, &category_ids)?;

        let items = db_categories
            .into_iter()
            .map(|db_category| {
                let category: DomainCategory = db_category.into();
                let products = product_map.remove(&category.id).unwrap_or_default();
                CategoryWithProducts { category, products }
            })
            .collect();

        Ok(items)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, new_category: &DomainNewCategory) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let insertable = DbNewCategory::from(new_category);

        let created = diesel::insert_into(categories::table)
            .values(&insertable)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.into())
    }

    fn update_category(
        &self,
        category_id: i32,
        updates: &DomainUpdateCategory,
    ) -> RepositoryResult<usize> {
        use crate::schema::categories;

        // An empty changeset cannot be built into an UPDATE statement;
        // it also cannot touch any rows.
        if updates.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;
        let db_updates = DbUpdateCategory::from(updates);

        let target = categories::table.filter(categories::id.eq(category_id));
        let affected = diesel::update(target).set(&db_updates).execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let target = categories::table.filter(categories::id.eq(category_id));
        let deleted = diesel::delete(target).execute(&mut conn)?;

        Ok(deleted)
    }
}

fn load_products_for_categories(
    conn: &mut SqliteConnection,
    category_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainProduct>>> {
    use crate::schema::products;

    if category_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let owner_ids: Vec<Option<i32>> = category_ids.iter().copied().map(Some).collect();
    let rows = products::table
        .filter(products::category_id.eq_any(owner_ids))
        .order(products::id.asc())
        .load::<DbProduct>(conn)?;

    let mut map: HashMap<i32, Vec<DomainProduct>> = HashMap::new();
    for row in rows {
        if let Some(category_id) = row.category_id {
            map.entry(category_id).or_default().push(row.into());
        }
    }

    Ok(map)
}
