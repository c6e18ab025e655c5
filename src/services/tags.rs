use serde::Deserialize;

use crate::domain::tag::{NewTag, Tag, TagListQuery, UpdateTag};
use crate::forms::tags::TagForm;
use crate::pagination::Pagination;
use crate::repository::{TagReader, TagWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the tag list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagsQuery {
    /// 1-based page number.
    pub page: Option<usize>,
    /// Page size.
    pub per_page: Option<usize>,
}

/// Data rendered by the tag list endpoint.
#[derive(Debug)]
pub struct TagListData {
    /// Number of tags, across all pages.
    pub total: usize,
    /// Window the results were cut to.
    pub pagination: Pagination,
    /// Tags on the requested page.
    pub tags: Vec<Tag>,
}

/// Loads a page of tags.
pub fn list_tags<R>(repo: &R, params: TagsQuery) -> ServiceResult<TagListData>
where
    R: TagReader + ?Sized,
{
    let pagination = Pagination::from_params(params.page, params.per_page);
    let (total, tags) = repo.list_tags(TagListQuery::new().paginate(pagination))?;

    Ok(TagListData {
        total,
        pagination,
        tags,
    })
}

/// Loads a single tag.
pub fn get_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<Tag>
where
    R: TagReader + ?Sized,
{
    repo.get_tag_by_id(tag_id)?.ok_or(ServiceError::NotFound)
}

/// Validates and persists a new tag.
pub fn create_tag<R>(repo: &R, form: TagForm) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    let name = form.into_name().map_err(ServiceError::Validation)?;
    repo.create_tag(&NewTag::new(name)).map_err(ServiceError::from)
}

/// Validates and renames an existing tag.
pub fn modify_tag<R>(repo: &R, tag_id: i32, form: TagForm) -> ServiceResult<Tag>
where
    R: TagReader + TagWriter + ?Sized,
{
    if repo.get_tag_by_id(tag_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let name = form.into_name().map_err(ServiceError::Validation)?;
    repo.update_tag(tag_id, &UpdateTag::new(name))
        .map_err(ServiceError::from)
}

/// Deletes a tag and its product links.
pub fn remove_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<()>
where
    R: TagWriter + ?Sized,
{
    repo.delete_tag(tag_id).map_err(ServiceError::from)
}
