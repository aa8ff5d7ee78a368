use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::product::Product as DomainProduct;
use crate::domain::tag::{
    NewTag as DomainNewTag, Tag as DomainTag, TagWithProducts, UpdateTag as DomainUpdateTag,
};
use crate::models::product::Product as DbProduct;
use crate::models::product_tag::ProductTag as DbProductTag;
use crate::models::tag::{NewTag as DbNewTag, Tag as DbTag, UpdateTag as DbUpdateTag};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, TagReader, TagWriter};

impl TagReader for DieselRepository {
    fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<TagWithProducts>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let tag = tags::table
            .filter(tags::id.eq(id))
            .first::<DbTag>(&mut conn)
            .optional()?;

        let Some(db_tag) = tag else {
            return Ok(None);
        };

        let tag: DomainTag = db_tag.into();
        let mut product_map = load_products_for_tags(&mut conn, &[tag.id])?;
        let products = product_map.remove(&tag.id).unwrap_or_default();

        Ok(Some(TagWithProducts { tag, products }))
    }

    fn list_tags(&self) -> RepositoryResult<Vec<TagWithProducts>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let db_tags = tags::table.order(tags::id.asc()).load::<DbTag>(&mut conn)?;

        if db_tags.is_empty() {
            return Ok(Vec::new());
        }

        let tag_ids: Vec<i32> = db_tags.iter().map(|tag| tag.id).collect();
        let mut product_map = load_products_for_tags(&mut conn, &tag_ids)?;

        let items = db_tags
            .into_iter()
            .map(|db_tag| {
                let tag: DomainTag = db_tag.into();
                let products = product_map.remove(&tag.id).unwrap_or_default();
                TagWithProducts { tag, products }
            })
            .collect();

        Ok(items)
    }
}

impl TagWriter for DieselRepository {
    fn create_tag(&self, new_tag: &DomainNewTag) -> RepositoryResult<DomainTag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let insertable = DbNewTag::from(new_tag);

        let created = diesel::insert_into(tags::table)
            .values(&insertable)
            .get_result::<DbTag>(&mut conn)?;

        Ok(created.into())
    }

    fn update_tag(&self, tag_id: i32, updates: &DomainUpdateTag) -> RepositoryResult<usize> {
        use crate::schema::tags;

        // An empty changeset cannot be built into an UPDATE statement;
        // it also cannot touch any rows.
        if updates.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;
        let db_updates = DbUpdateTag::from(updates);

        let target = tags::table.filter(tags::id.eq(tag_id));
        let affected = diesel::update(target).set(&db_updates).execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<usize> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let target = tags::table.filter(tags::id.eq(tag_id));
        let deleted = diesel::delete(target).execute(&mut conn)?;

        Ok(deleted)
    }
}

fn load_products_for_tags(
    conn: &mut SqliteConnection,
    tag_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainProduct>>> {
    use crate::schema::{product_tags, products};

    if tag_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let joined = product_tags::table
        .inner_join(products::table)
        .filter(product_tags::tag_id.eq_any(tag_ids))
        .order(product_tags::id.asc())
        .load::<(DbProductTag, DbProduct)>(conn)?;

    let mut map: HashMap<i32, Vec<DomainProduct>> = HashMap::new();
    for (link, product) in joined {
        map.entry(link.tag_id).or_default().push(product.into());
    }

    Ok(map)
}
