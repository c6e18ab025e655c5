use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;

use crate::forms::categories::CategoryForm;
use crate::repository::DieselRepository;
use crate::responses::Page;
use crate::responses::categories::CategoryRepr;
use crate::services::ServiceError;
use crate::services::categories::{self, CategoriesQuery};

fn category_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({"detail": "Category not found!"}))
}

#[get("/categories/")]
pub async fn list_categories(
    params: web::Query<CategoriesQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::list_categories(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            let results: Vec<CategoryRepr> =
                data.categories.iter().map(CategoryRepr::from).collect();
            let page = Page::new("/categories/", data.total, data.pagination, None, results);
            HttpResponse::Ok().json(page)
        }
        Err(err) => {
            log::error!("Failed to list categories: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/categories/")]
pub async fn create_category(
    payload: web::Json<CategoryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::create_category(repo.get_ref(), payload.into_inner()) {
        Ok(category) => HttpResponse::Created().json(CategoryRepr::from(&category)),
        Err(ServiceError::Validation(errors)) => HttpResponse::BadRequest().json(errors),
        Err(err) => {
            log::error!("Failed to create category: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/categories/{category_id:\\d+}/")]
pub async fn get_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::get_category(repo.get_ref(), path.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(CategoryRepr::from(&category)),
        Err(ServiceError::NotFound) => category_not_found(),
        Err(err) => {
            log::error!("Failed to load category: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/categories/{category_id:\\d+}/")]
pub async fn update_category(
    path: web::Path<i32>,
    payload: web::Json<CategoryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::modify_category(repo.get_ref(), path.into_inner(), payload.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(CategoryRepr::from(&category)),
        Err(ServiceError::Validation(errors)) => HttpResponse::BadRequest().json(errors),
        Err(ServiceError::NotFound) => category_not_found(),
        Err(err) => {
            log::error!("Failed to update category: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/categories/{category_id:\\d+}/")]
pub async fn delete_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::remove_category(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::NotFound) => category_not_found(),
        Err(err) => {
            log::error!("Failed to delete category: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
