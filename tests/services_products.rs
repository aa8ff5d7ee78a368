//! End-to-end reconciliation behavior through the service layer against a
//! real sqlite database.

use std::collections::HashSet;

use inventory_api::domain::product::NewProduct;
use inventory_api::domain::product_tag::NewProductTag;
use inventory_api::domain::tag::NewTag;
use inventory_api::payloads::products::{CreateProductPayload, UpdateProductPayload};
use inventory_api::repository::{
    DieselRepository, ProductTagReader, ProductTagWriter, ProductWriter, TagWriter,
};
use inventory_api::services::products::{create_product, modify_product, reconcile_product_tags};

mod common;

/// Creates `count` tags and returns their ids (1-based sequence in a fresh db).
fn seed_tags(repo: &DieselRepository, count: usize) -> Vec<i32> {
    (0..count)
        .map(|n| {
            repo.create_tag(&NewTag::new(format!("tag-{n}")))
                .unwrap()
                .id
        })
        .collect()
}

fn tag_set(repo: &DieselRepository, product_id: i32) -> HashSet<i32> {
    repo.list_product_tags(product_id)
        .unwrap()
        .into_iter()
        .map(|link| link.tag_id)
        .collect()
}

#[test]
fn reconciliation_replaces_the_difference() {
    let test_db = common::TestDb::new("reconciliation_replaces_the_difference");
    let repo = DieselRepository::new(test_db.pool());

    let tags = seed_tags(&repo, 4);
    let product = repo.create_product(&NewProduct::new("Ball", 20.0)).unwrap();
    repo.create_product_tags(&[
        NewProductTag::new(product.id, tags[0]),
        NewProductTag::new(product.id, tags[1]),
        NewProductTag::new(product.id, tags[2]),
    ])
    .unwrap();

    let requested = [tags[1], tags[2], tags[3]];
    reconcile_product_tags(&repo, product.id, &requested).unwrap();

    assert_eq!(tag_set(&repo, product.id), HashSet::from(requested));

    // Untouched associations keep their original row ids.
    let links = repo.list_product_tags(product.id).unwrap();
    let kept: Vec<&_> = links
        .iter()
        .filter(|link| link.tag_id == tags[1] || link.tag_id == tags[2])
        .collect();
    assert_eq!(kept.len(), 2);
    assert!(kept.iter().all(|link| link.id <= 3));
}

#[test]
fn reconciliation_is_idempotent() {
    let test_db = common::TestDb::new("reconciliation_is_idempotent");
    let repo = DieselRepository::new(test_db.pool());

    let tags = seed_tags(&repo, 3);
    let product = repo.create_product(&NewProduct::new("Ball", 20.0)).unwrap();

    reconcile_product_tags(&repo, product.id, &tags).unwrap();
    let first = repo.list_product_tags(product.id).unwrap();

    reconcile_product_tags(&repo, product.id, &tags).unwrap();
    let second = repo.list_product_tags(product.id).unwrap();

    // Same rows, same ids: the second run performed no inserts or deletes.
    assert_eq!(first, second);
}

#[test]
fn reconciliation_collapses_duplicates_everywhere() {
    let test_db = common::TestDb::new("reconciliation_collapses_duplicates_everywhere");
    let repo = DieselRepository::new(test_db.pool());

    let tags = seed_tags(&repo, 2);
    let product = repo.create_product(&NewProduct::new("Ball", 20.0)).unwrap();
    // Storage already holds a duplicate pair for the first tag.
    repo.create_product_tags(&[
        NewProductTag::new(product.id, tags[0]),
        NewProductTag::new(product.id, tags[0]),
    ])
    .unwrap();

    reconcile_product_tags(&repo, product.id, &[tags[0], tags[0], tags[1]]).unwrap();

    let links = repo.list_product_tags(product.id).unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(tag_set(&repo, product.id), HashSet::from([tags[0], tags[1]]));
}

#[test]
fn create_product_without_tags_creates_no_join_rows() {
    let test_db = common::TestDb::new("create_product_without_tags_creates_no_join_rows");
    let repo = DieselRepository::new(test_db.pool());

    let omitted = create_product(
        &repo,
        CreateProductPayload {
            product_name: "Plain".to_string(),
            price: 5.0,
            stock: None,
            category_id: None,
            tag_ids: None,
        },
    )
    .unwrap();
    assert!(repo.list_product_tags(omitted.id).unwrap().is_empty());
    // Schema default applies when stock is absent.
    assert_eq!(omitted.stock, 10);

    let empty = create_product(
        &repo,
        CreateProductPayload {
            product_name: "Empty".to_string(),
            price: 5.0,
            stock: None,
            category_id: None,
            tag_ids: Some(Vec::new()),
        },
    )
    .unwrap();
    assert!(repo.list_product_tags(empty.id).unwrap().is_empty());
}

#[test]
fn create_product_attaches_one_row_per_requested_tag() {
    let test_db = common::TestDb::new("create_product_attaches_one_row_per_requested_tag");
    let repo = DieselRepository::new(test_db.pool());

    let tags = seed_tags(&repo, 3);
    let product = create_product(
        &repo,
        CreateProductPayload {
            product_name: "Tagged".to_string(),
            price: 30.0,
            stock: Some(2),
            category_id: None,
            tag_ids: Some(tags.clone()),
        },
    )
    .unwrap();

    assert_eq!(tag_set(&repo, product.id), tags.iter().copied().collect());
}

#[test]
fn update_without_tag_ids_leaves_associations_alone() {
    let test_db = common::TestDb::new("update_without_tag_ids_leaves_associations_alone");
    let repo = DieselRepository::new(test_db.pool());

    let tags = seed_tags(&repo, 2);
    let product = repo.create_product(&NewProduct::new("Ball", 20.0)).unwrap();
    repo.create_product_tags(&[NewProductTag::new(product.id, tags[0])])
        .unwrap();

    let affected = modify_product(
        &repo,
        product.id,
        UpdateProductPayload {
            price: Some(25.0),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(affected, 1);
    assert_eq!(tag_set(&repo, product.id), HashSet::from([tags[0]]));
}

#[test]
fn update_with_empty_tag_ids_clears_associations() {
    let test_db = common::TestDb::new("update_with_empty_tag_ids_clears_associations");
    let repo = DieselRepository::new(test_db.pool());

    let tags = seed_tags(&repo, 2);
    let product = repo.create_product(&NewProduct::new("Ball", 20.0)).unwrap();
    repo.create_product_tags(&[
        NewProductTag::new(product.id, tags[0]),
        NewProductTag::new(product.id, tags[1]),
    ])
    .unwrap();

    modify_product(
        &repo,
        product.id,
        UpdateProductPayload {
            tag_ids: Some(Vec::new()),
            ..Default::default()
        },
    )
    .unwrap();

    assert!(repo.list_product_tags(product.id).unwrap().is_empty());
}
