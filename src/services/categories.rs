use crate::domain::category::{Category, CategoryWithProducts};
use crate::payloads::categories::{CreateCategoryPayload, UpdateCategoryPayload};
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult};

/// Client-visible message for category lookups that miss.
pub const CATEGORY_NOT_FOUND: &str = "No category found with this id!";

/// Fetches all categories with their products eagerly loaded.
pub fn load_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryWithProducts>>
where
    R: CategoryReader + ?Sized,
{
    Ok(repo.list_categories()?)
}

/// Fetches one category by id with its products eagerly loaded.
pub fn get_category<R>(repo: &R, category_id: i32) -> ServiceResult<CategoryWithProducts>
where
    R: CategoryReader + ?Sized,
{
    repo.get_category_by_id(category_id)?
        .ok_or_else(|| ServiceError::NotFound(CATEGORY_NOT_FOUND.to_string()))
}

/// Creates a new category from the request payload.
pub fn create_category<R>(repo: &R, payload: CreateCategoryPayload) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let new_category = payload
        .into_new_category()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    Ok(repo.create_category(&new_category)?)
}

/// Applies a partial update, returning the affected row count.
pub fn modify_category<R>(
    repo: &R,
    category_id: i32,
    payload: UpdateCategoryPayload,
) -> ServiceResult<usize>
where
    R: CategoryWriter + ?Sized,
{
    let updates = payload
        .into_update_category()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let affected = repo.update_category(category_id, &updates)?;
    if affected == 0 {
        return Err(ServiceError::NotFound(CATEGORY_NOT_FOUND.to_string()));
    }

    Ok(affected)
}

/// Deletes a category, returning the deleted row count.
pub fn remove_category<R>(repo: &R, category_id: i32) -> ServiceResult<usize>
where
    R: CategoryWriter + ?Sized,
{
    let deleted = repo.delete_category(category_id)?;
    if deleted == 0 {
        return Err(ServiceError::NotFound(CATEGORY_NOT_FOUND.to_string()));
    }

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::repository::mock::{MockCategoryReader, MockCategoryWriter};

    fn sample_category(id: i32, name: &str) -> Category {
        Category {
            id,
            category_name: name.to_string(),
        }
    }

    #[test]
    fn get_category_signals_not_found_with_message() {
        let mut repo = MockCategoryReader::new();
        repo.expect_get_category_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = get_category(&repo, 42);

        match result {
            Err(ServiceError::NotFound(message)) => {
                assert_eq!(message, "No category found with this id!");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn get_category_returns_products() {
        let mut repo = MockCategoryReader::new();
        repo.expect_get_category_by_id()
            .times(1)
            .returning(|id| {
                Ok(Some(CategoryWithProducts {
                    category: sample_category(id, "Shirts"),
                    products: Vec::new(),
                }))
            });

        let data = get_category(&repo, 3).expect("expected success");

        assert_eq!(data.category.id, 3);
        assert_eq!(data.category.category_name, "Shirts");
        assert!(data.products.is_empty());
    }

    #[test]
    fn create_category_persists_payload() {
        let mut repo = MockCategoryWriter::new();
        repo.expect_create_category()
            .times(1)
            .withf(|new_category| new_category.category_name == "Footwear")
            .returning(|_| Ok(sample_category(1, "Footwear")));

        let payload = CreateCategoryPayload {
            category_name: "Footwear".to_string(),
        };

        let created = create_category(&repo, payload).expect("expected success");

        assert_eq!(created.id, 1);
        assert_eq!(created.category_name, "Footwear");
    }

    #[test]
    fn create_category_rejects_invalid_payload() {
        let repo = MockCategoryWriter::new();
        let payload = CreateCategoryPayload {
            category_name: String::new(),
        };

        let result = create_category(&repo, payload);

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn modify_category_signals_not_found_on_zero_rows() {
        let mut repo = MockCategoryWriter::new();
        repo.expect_update_category()
            .times(1)
            .returning(|_, _| Ok(0));

        let payload = UpdateCategoryPayload {
            category_name: Some("Hats".to_string()),
        };

        let result = modify_category(&repo, 99, payload);

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn modify_category_returns_affected_count() {
        let mut repo = MockCategoryWriter::new();
        repo.expect_update_category()
            .times(1)
            .withf(|category_id, updates| {
                *category_id == 5 && updates.category_name.as_deref() == Some("Hats")
            })
            .returning(|_, _| Ok(1));

        let payload = UpdateCategoryPayload {
            category_name: Some("Hats".to_string()),
        };

        let affected = modify_category(&repo, 5, payload).expect("expected success");

        assert_eq!(affected, 1);
    }

    #[test]
    fn remove_category_signals_not_found_on_zero_rows() {
        let mut repo = MockCategoryWriter::new();
        repo.expect_delete_category().times(1).returning(|_| Ok(0));

        let result = remove_category(&repo, 7);

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn remove_category_returns_deleted_count() {
        let mut repo = MockCategoryWriter::new();
        repo.expect_delete_category().times(1).returning(|_| Ok(1));

        let deleted = remove_category(&repo, 7).expect("expected success");

        assert_eq!(deleted, 1);
    }
}
