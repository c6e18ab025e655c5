use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;

use crate::forms::tags::TagForm;
use crate::repository::DieselRepository;
use crate::responses::Page;
use crate::responses::tags::TagRepr;
use crate::services::ServiceError;
use crate::services::tags::{self, TagsQuery};

fn tag_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({"detail": "Tag not found!"}))
}

#[get("/tags/")]
pub async fn list_tags(
    params: web::Query<TagsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match tags::list_tags(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            let results: Vec<TagRepr> = data.tags.iter().map(TagRepr::from).collect();
            let page = Page::new("/tags/", data.total, data.pagination, None, results);
            HttpResponse::Ok().json(page)
        }
        Err(err) => {
            log::error!("Failed to list tags: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/tags/")]
pub async fn create_tag(
    payload: web::Json<TagForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match tags::create_tag(repo.get_ref(), payload.into_inner()) {
        Ok(tag) => HttpResponse::Created().json(TagRepr::from(&tag)),
        Err(ServiceError::Validation(errors)) => HttpResponse::BadRequest().json(errors),
        Err(err) => {
            log::error!("Failed to create tag: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/tags/{tag_id:\\d+}/")]
pub async fn get_tag(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match tags::get_tag(repo.get_ref(), path.into_inner()) {
        Ok(tag) => HttpResponse::Ok().json(TagRepr::from(&tag)),
        Err(ServiceError::NotFound) => tag_not_found(),
        Err(err) => {
            log::error!("Failed to load tag: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/tags/{tag_id:\\d+}/")]
pub async fn update_tag(
    path: web::Path<i32>,
    payload: web::Json<TagForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match tags::modify_tag(repo.get_ref(), path.into_inner(), payload.into_inner()) {
        Ok(tag) => HttpResponse::Ok().json(TagRepr::from(&tag)),
        Err(ServiceError::Validation(errors)) => HttpResponse::BadRequest().json(errors),
        Err(ServiceError::NotFound) => tag_not_found(),
        Err(err) => {
            log::error!("Failed to update tag: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/tags/{tag_id:\\d+}/")]
pub async fn delete_tag(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match tags::remove_tag(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::NotFound) => tag_not_found(),
        Err(err) => {
            log::error!("Failed to delete tag: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
