use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct,
    UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub category_id: Option<i32>,
    pub title: String,
    pub text: Option<String>,
    pub price: f64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub title: &'a str,
    pub text: Option<&'a str>,
    pub price: f64,
    pub is_active: bool,
    pub category_id: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProduct<'a> {
    pub title: &'a str,
    pub text: Option<&'a str>,
    pub price: f64,
    pub is_active: bool,
    pub category_id: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            title: value.title,
            text: value.text,
            price: value.price,
            is_active: value.is_active,
            category_id: value.category_id,
            category: None,
            tags: Vec::new(),
            reviews: Vec::new(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            title: value.title.as_str(),
            text: value.text.as_deref(),
            price: value.price,
            is_active: value.is_active,
            category_id: value.category_id,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            title: value.title.as_str(),
            text: value.text.as_deref(),
            price: value.price,
            is_active: value.is_active,
            category_id: value.category_id,
            updated_at: value.updated_at,
        }
    }
}
