use serde::Deserialize;

use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::forms::FieldErrors;
use crate::forms::products::{ProductAttributes, ProductForm};
use crate::pagination::Pagination;
use crate::repository::{CategoryReader, ProductReader, ProductWriter, TagReader};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the product list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductsQuery {
    /// Case-insensitive substring filter applied to the title.
    pub search: Option<String>,
    /// 1-based page number.
    pub page: Option<usize>,
    /// Page size.
    pub per_page: Option<usize>,
}

/// Data rendered by the product list endpoint.
#[derive(Debug)]
pub struct ProductListData {
    /// Number of products matching the filter, across all pages.
    pub total: usize,
    /// Window the results were cut to.
    pub pagination: Pagination,
    /// The search term the results were filtered by, if any.
    pub search: Option<String>,
    /// Products on the requested page.
    pub products: Vec<Product>,
}

/// Loads a page of products, optionally filtered by a title substring.
pub fn list_products<R>(repo: &R, params: ProductsQuery) -> ServiceResult<ProductListData>
where
    R: ProductReader + ?Sized,
{
    let pagination = Pagination::from_params(params.page, params.per_page);
    let search = params.search.filter(|term| !term.is_empty());

    let mut query = ProductListQuery::new().paginate(pagination);
    if let Some(term) = &search {
        query = query.search(term.clone());
    }

    let (total, products) = repo.list_products(query)?;

    Ok(ProductListData {
        total,
        pagination,
        search,
        products,
    })
}

/// Loads a single product with its category, tags and reviews.
pub fn get_product<R>(repo: &R, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)?
        .ok_or(ServiceError::NotFound)
}

/// Validates and persists a new product together with its tag set.
pub fn create_product<R>(repo: &R, form: ProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + CategoryReader + TagReader + ?Sized,
{
    let attributes = form.into_attributes().map_err(ServiceError::Validation)?;
    check_references(repo, &attributes)?;

    let new_product = NewProduct::new(attributes.title, attributes.price)
        .with_text(attributes.text)
        .with_category_id(attributes.category_id)
        .with_tag_ids(attributes.tags)
        .active(attributes.is_active);

    repo.create_product(&new_product).map_err(ServiceError::from)
}

/// Validates and fully replaces an existing product, including its tag set.
///
/// The existence check runs before validation so a missing product reports
/// 404 even for a malformed payload.
pub fn modify_product<R>(repo: &R, product_id: i32, form: ProductForm) -> ServiceResult<Product>
where
    R: ProductReader + ProductWriter + CategoryReader + TagReader + ?Sized,
{
    if repo.get_product_by_id(product_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let attributes = form.into_attributes().map_err(ServiceError::Validation)?;
    check_references(repo, &attributes)?;

    let update = UpdateProduct::new(
        attributes.title,
        Some(attributes.text),
        attributes.price,
        attributes.is_active,
        Some(attributes.category_id),
        attributes.tags,
    );

    repo.update_product(product_id, &update)
        .map_err(ServiceError::from)
}

/// Deletes a product; its reviews and tag links go with it.
pub fn remove_product<R>(repo: &R, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(product_id).map_err(ServiceError::from)
}

/// Referential checks against the store: the category and every distinct
/// tag id must exist. Read-only; nothing is persisted on failure.
fn check_references<R>(repo: &R, attributes: &ProductAttributes) -> ServiceResult<()>
where
    R: CategoryReader + TagReader + ?Sized,
{
    let mut errors = FieldErrors::new();

    if repo.get_category_by_id(attributes.category_id)?.is_none() {
        errors.add("category_id", "Category does not exist");
    }

    let found = repo.get_tags_by_ids(&attributes.tags)?;
    if found.len() != attributes.tags.len() {
        errors.add("tags", "Tags does not exist");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Validation(errors))
    }
}
