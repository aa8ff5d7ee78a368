use crate::domain::tag::{Tag, TagWithProducts};
use crate::payloads::tags::{CreateTagPayload, UpdateTagPayload};
use crate::repository::{TagReader, TagWriter};
use crate::services::{ServiceError, ServiceResult};

/// Client-visible message for tag lookups that miss.
pub const TAG_NOT_FOUND: &str = "No tag found with this id!";

/// Fetches all tags with their products eagerly loaded through the join table.
pub fn load_tags<R>(repo: &R) -> ServiceResult<Vec<TagWithProducts>>
where
    R: TagReader + ?Sized,
{
    Ok(repo.list_tags()?)
}

/// Fetches one tag by id with its products eagerly loaded.
pub fn get_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<TagWithProducts>
where
    R: TagReader + ?Sized,
{
    repo.get_tag_by_id(tag_id)?
        .ok_or_else(|| ServiceError::NotFound(TAG_NOT_FOUND.to_string()))
}

/// Creates a new tag from the request payload.
pub fn create_tag<R>(repo: &R, payload: CreateTagPayload) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    let new_tag = payload
        .into_new_tag()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    Ok(repo.create_tag(&new_tag)?)
}

/// Applies a partial update, returning the affected row count.
pub fn modify_tag<R>(repo: &R, tag_id: i32, payload: UpdateTagPayload) -> ServiceResult<usize>
where
    R: TagWriter + ?Sized,
{
    let updates = payload
        .into_update_tag()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let affected = repo.update_tag(tag_id, &updates)?;
    if affected == 0 {
        return Err(ServiceError::NotFound(TAG_NOT_FOUND.to_string()));
    }

    Ok(affected)
}

/// Deletes a tag, returning the deleted row count. Join rows referencing the
/// tag are left in place.
pub fn remove_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<usize>
where
    R: TagWriter + ?Sized,
{
    let deleted = repo.delete_tag(tag_id)?;
    if deleted == 0 {
        return Err(ServiceError::NotFound(TAG_NOT_FOUND.to_string()));
    }

    Ok(deleted)
}
