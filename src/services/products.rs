use std::collections::HashSet;

use crate::domain::product::{Product, ProductDetails};
use crate::domain::product_tag::NewProductTag;
use crate::payloads::products::{CreateProductPayload, UpdateProductPayload};
use crate::repository::{ProductReader, ProductTagReader, ProductTagWriter, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Client-visible message for product lookups that miss.
pub const PRODUCT_NOT_FOUND: &str = "No product found with this id!";

/// Fetches all products with category and tags eagerly loaded.
pub fn load_products<R>(repo: &R) -> ServiceResult<Vec<ProductDetails>>
where
    R: ProductReader + ?Sized,
{
    Ok(repo.list_products()?)
}

/// Fetches one product by id with category and tags eagerly loaded.
pub fn get_product<R>(repo: &R, product_id: i32) -> ServiceResult<ProductDetails>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)?
        .ok_or_else(|| ServiceError::NotFound(PRODUCT_NOT_FOUND.to_string()))
}

/// Creates a new product, then attaches one join row per requested tag id.
///
/// The product insert and the join-row insert are two separate statements
/// with no enclosing transaction; a failure between them leaves the product
/// without its tags.
pub fn create_product<R>(repo: &R, payload: CreateProductPayload) -> ServiceResult<Product>
where
    R: ProductWriter + ProductTagWriter + ?Sized,
{
    let (new_product, tag_ids) = payload
        .into_parts()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let product = repo.create_product(&new_product)?;

    if let Some(tag_ids) = tag_ids {
        if !tag_ids.is_empty() {
            let links: Vec<NewProductTag> = tag_ids
                .iter()
                .map(|tag_id| NewProductTag::new(product.id, *tag_id))
                .collect();
            repo.create_product_tags(&links)?;
        }
    }

    Ok(product)
}

/// Applies a partial update, then reconciles tag associations when the
/// payload carries a tag-id list. Returns the affected row count.
///
/// The affected count is deliberately not checked: an unknown product id
/// flows through with zero updates rather than a 404, and an absent tag-id
/// list skips reconciliation entirely.
pub fn modify_product<R>(
    repo: &R,
    product_id: i32,
    payload: UpdateProductPayload,
) -> ServiceResult<usize>
where
    R: ProductWriter + ProductTagReader + ProductTagWriter + ?Sized,
{
    let (updates, tag_ids) = payload
        .into_parts()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let affected = repo.update_product(product_id, &updates)?;

    if let Some(tag_ids) = tag_ids {
        reconcile_product_tags(repo, product_id, &tag_ids)?;
    }

    Ok(affected)
}

/// Deletes a product, returning the deleted row count. Join rows referencing
/// the product are left in place.
pub fn remove_product<R>(repo: &R, product_id: i32) -> ServiceResult<usize>
where
    R: ProductWriter + ?Sized,
{
    let deleted = repo.delete_product(product_id)?;
    if deleted == 0 {
        return Err(ServiceError::NotFound(PRODUCT_NOT_FOUND.to_string()));
    }

    Ok(deleted)
}

/// Makes the stored product-tag associations match `requested_tag_ids`.
///
/// Duplicates in the request collapse to a set. Stored rows whose tag is not
/// requested are removed, as are surplus rows when storage already holds
/// duplicates for a kept tag, so the postcondition holds either way: after
/// the call, the product's join rows equal the requested set exactly.
///
/// The delete and the bulk insert are two separate statements with no
/// enclosing transaction and no rollback.
pub fn reconcile_product_tags<R>(
    repo: &R,
    product_id: i32,
    requested_tag_ids: &[i32],
) -> ServiceResult<()>
where
    R: ProductTagReader + ProductTagWriter + ?Sized,
{
    let current = repo.list_product_tags(product_id)?;

    let requested: HashSet<i32> = requested_tag_ids.iter().copied().collect();

    // First surviving row wins for each requested tag; everything else goes.
    let mut kept: HashSet<i32> = HashSet::new();
    let mut to_remove: Vec<i32> = Vec::new();
    for link in &current {
        if requested.contains(&link.tag_id) && kept.insert(link.tag_id) {
            continue;
        }
        to_remove.push(link.id);
    }

    let mut seen: HashSet<i32> = HashSet::new();
    let to_add: Vec<NewProductTag> = requested_tag_ids
        .iter()
        .copied()
        .filter(|tag_id| seen.insert(*tag_id))
        .filter(|tag_id| !kept.contains(tag_id))
        .map(|tag_id| NewProductTag::new(product_id, tag_id))
        .collect();

    repo.delete_product_tags(&to_remove)?;
    repo.create_product_tags(&to_add)?;

    Ok(())
}
