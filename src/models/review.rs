use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::review::{NewReview as DomainNewReview, Review as DomainReview};

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::reviews,
    belongs_to(super::product::Product, foreign_key = product_id)
)]
pub struct Review {
    pub id: i32,
    pub product_id: i32,
    pub text: String,
    pub stars: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReview<'a> {
    pub product_id: i32,
    pub text: &'a str,
    pub stars: i32,
}

impl From<Review> for DomainReview {
    fn from(value: Review) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            text: value.text,
            stars: value.stars,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewReview> for NewReview<'a> {
    fn from(value: &'a DomainNewReview) -> Self {
        Self {
            product_id: value.product_id,
            text: value.text.as_str(),
            stars: value.stars,
        }
    }
}
