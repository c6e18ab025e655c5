use serde::Deserialize;

use crate::domain::category::{Category, CategoryListQuery, NewCategory, UpdateCategory};
use crate::forms::FieldErrors;
use crate::forms::categories::{CategoryAttributes, CategoryForm};
use crate::pagination::Pagination;
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the category list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoriesQuery {
    /// 1-based page number.
    pub page: Option<usize>,
    /// Page size.
    pub per_page: Option<usize>,
}

/// Data rendered by the category list endpoint.
#[derive(Debug)]
pub struct CategoryListData {
    /// Number of categories, across all pages.
    pub total: usize,
    /// Window the results were cut to.
    pub pagination: Pagination,
    /// Categories on the requested page.
    pub categories: Vec<Category>,
}

/// Loads a page of categories.
pub fn list_categories<R>(repo: &R, params: CategoriesQuery) -> ServiceResult<CategoryListData>
where
    R: CategoryReader + ?Sized,
{
    let pagination = Pagination::from_params(params.page, params.per_page);
    let (total, categories) = repo.list_categories(CategoryListQuery::new().paginate(pagination))?;

    Ok(CategoryListData {
        total,
        pagination,
        categories,
    })
}

/// Loads a single category.
pub fn get_category<R>(repo: &R, category_id: i32) -> ServiceResult<Category>
where
    R: CategoryReader + ?Sized,
{
    repo.get_category_by_id(category_id)?
        .ok_or(ServiceError::NotFound)
}

/// Validates and persists a new category.
pub fn create_category<R>(repo: &R, form: CategoryForm) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter + ?Sized,
{
    let attributes = form.into_attributes().map_err(ServiceError::Validation)?;
    check_parent(repo, &attributes, None)?;

    let mut new_category = NewCategory::new(attributes.name);
    if let Some(parent_id) = attributes.parent_id {
        new_category = new_category.with_parent_id(parent_id);
    }

    repo.create_category(&new_category)
        .map_err(ServiceError::from)
}

/// Validates and updates an existing category.
pub fn modify_category<R>(
    repo: &R,
    category_id: i32,
    form: CategoryForm,
) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter + ?Sized,
{
    if repo.get_category_by_id(category_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let attributes = form.into_attributes().map_err(ServiceError::Validation)?;
    check_parent(repo, &attributes, Some(category_id))?;

    let update = UpdateCategory::new(attributes.name, attributes.parent_id);
    repo.update_category(category_id, &update)
        .map_err(ServiceError::from)
}

/// Deletes a category; descendants go with it, products lose the reference.
pub fn remove_category<R>(repo: &R, category_id: i32) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    repo.delete_category(category_id).map_err(ServiceError::from)
}

/// The parent, when given, must exist and must not be the category itself.
fn check_parent<R>(
    repo: &R,
    attributes: &CategoryAttributes,
    category_id: Option<i32>,
) -> ServiceResult<()>
where
    R: CategoryReader + ?Sized,
{
    let Some(parent_id) = attributes.parent_id else {
        return Ok(());
    };

    if category_id == Some(parent_id) {
        return Err(ServiceError::Validation(FieldErrors::single(
            "parent_id",
            "A category cannot be its own parent.",
        )));
    }

    if repo.get_category_by_id(parent_id)?.is_none() {
        return Err(ServiceError::Validation(FieldErrors::single(
            "parent_id",
            "Category does not exist",
        )));
    }

    Ok(())
}
