pub mod auth;
pub mod db;
pub mod domain;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod responses;
pub mod routes;
pub mod schema;
pub mod services;
