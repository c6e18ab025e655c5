use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;

use crate::forms::products::ProductForm;
use crate::repository::DieselRepository;
use crate::responses::Page;
use crate::responses::products::ProductRepr;
use crate::services::ServiceError;
use crate::services::products::{self, ProductsQuery};

fn product_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({"detail": "Product not found!"}))
}

#[get("/")]
pub async fn list_products(
    params: web::Query<ProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::list_products(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            let results: Vec<ProductRepr> = data.products.iter().map(ProductRepr::from).collect();
            let page = Page::new(
                "/",
                data.total,
                data.pagination,
                data.search.as_deref(),
                results,
            );
            HttpResponse::Ok().json(page)
        }
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/")]
pub async fn create_product(
    payload: web::Json<ProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::create_product(repo.get_ref(), payload.into_inner()) {
        Ok(product) => HttpResponse::Created().json(json!({"product_id": product.id})),
        Err(ServiceError::Validation(errors)) => HttpResponse::BadRequest().json(errors),
        Err(err) => {
            log::error!("Failed to create product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/{product_id:\\d+}/")]
pub async fn get_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::get_product(repo.get_ref(), path.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(ProductRepr::from(&product)),
        Err(ServiceError::NotFound) => product_not_found(),
        Err(err) => {
            log::error!("Failed to load product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

// 201 on success is part of the existing contract for product updates.
#[put("/{product_id:\\d+}/")]
pub async fn update_product(
    path: web::Path<i32>,
    payload: web::Json<ProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::modify_product(repo.get_ref(), path.into_inner(), payload.into_inner()) {
        Ok(product) => HttpResponse::Created().json(ProductRepr::from(&product)),
        Err(ServiceError::Validation(errors)) => HttpResponse::BadRequest().json(errors),
        Err(ServiceError::NotFound) => product_not_found(),
        Err(err) => {
            log::error!("Failed to update product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/{product_id:\\d+}/")]
pub async fn delete_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::remove_product(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::NotFound) => product_not_found(),
        Err(err) => {
            log::error!("Failed to delete product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
