use diesel::prelude::*;

use crate::domain::product_tag::{
    NewProductTag as DomainNewProductTag, ProductTag as DomainProductTag,
};
use crate::models::product_tag::{NewProductTag as DbNewProductTag, ProductTag as DbProductTag};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProductTagReader, ProductTagWriter};

impl ProductTagReader for DieselRepository {
    fn list_product_tags(&self, product_id: i32) -> RepositoryResult<Vec<DomainProductTag>> {
        use crate::schema::product_tags;

        let mut conn = self.conn()?;
        let links = product_tags::table
            .filter(product_tags::product_id.eq(product_id))
            .order(product_tags::id.asc())
            .load::<DbProductTag>(&mut conn)?;

        Ok(links.into_iter().map(DomainProductTag::from).collect())
    }
}

impl ProductTagWriter for DieselRepository {
    fn create_product_tags(&self, new_links: &[DomainNewProductTag]) -> RepositoryResult<usize> {
        use crate::schema::product_tags;

        if new_links.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;
        let insertable: Vec<DbNewProductTag> = new_links.iter().map(Into::into).collect();

        let created = diesel::insert_into(product_tags::table)
            .values(&insertable)
            .execute(&mut conn)?;

        Ok(created)
    }

    fn delete_product_tags(&self, link_ids: &[i32]) -> RepositoryResult<usize> {
        use crate::schema::product_tags;

        if link_ids.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;
        let target = product_tags::table.filter(product_tags::id.eq_any(link_ids));
        let deleted = diesel::delete(target).execute(&mut conn)?;

        Ok(deleted)
    }
}
