use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::user::{
    AuthToken as DomainAuthToken, NewAuthToken as DomainNewAuthToken, NewUser as DomainNewUser,
    User as DomainUser,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub is_active: bool,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::auth_tokens)]
pub struct AuthToken {
    pub id: i32,
    pub user_id: i32,
    pub key: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::auth_tokens)]
pub struct NewAuthToken<'a> {
    pub user_id: i32,
    pub key: &'a str,
}

impl From<User> for DomainUser {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            username: value.username,
            password_hash: value.password_hash,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewUser> for NewUser<'a> {
    fn from(value: &'a DomainNewUser) -> Self {
        Self {
            username: value.username.as_str(),
            password_hash: value.password_hash.as_str(),
            is_active: value.is_active,
        }
    }
}

impl From<AuthToken> for DomainAuthToken {
    fn from(value: AuthToken) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            key: value.key,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewAuthToken> for NewAuthToken<'a> {
    fn from(value: &'a DomainNewAuthToken) -> Self {
        Self {
            user_id: value.user_id,
            key: value.key.as_str(),
        }
    }
}
