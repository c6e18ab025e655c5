use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;

use crate::forms::FieldErrors;
use crate::forms::users::CredentialsForm;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::users;

#[post("/users/registration/")]
pub async fn register(
    payload: web::Json<CredentialsForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users::register_user(repo.get_ref(), payload.into_inner()) {
        Ok(user) => HttpResponse::Created().json(json!({"user_id": user.id})),
        Err(ServiceError::Validation(errors)) => HttpResponse::BadRequest().json(errors),
        // A concurrent registration can slip past the existence check and
        // trip the unique constraint instead.
        Err(ServiceError::Conflict) => HttpResponse::BadRequest()
            .json(FieldErrors::single("username", "User already exists!")),
        Err(err) => {
            log::error!("Failed to register user: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/users/authorization/")]
pub async fn authorize(
    payload: web::Json<CredentialsForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users::authenticate_user(repo.get_ref(), payload.into_inner()) {
        Ok(token) => HttpResponse::Ok().json(json!({"key": token.key})),
        Err(ServiceError::Validation(errors)) => HttpResponse::BadRequest().json(errors),
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(err) => {
            log::error!("Failed to authenticate user: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
