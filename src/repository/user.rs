use diesel::prelude::*;

use crate::domain::user::{
    AuthToken as DomainAuthToken, NewAuthToken as DomainNewAuthToken, NewUser as DomainNewUser,
    User as DomainUser,
};
use crate::models::user::{
    AuthToken as DbAuthToken, NewAuthToken as DbNewAuthToken, NewUser as DbNewUser, User as DbUser,
};
use crate::repository::{DieselRepository, RepositoryResult, UserReader, UserWriter};

impl UserReader for DieselRepository {
    fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::username.eq(username))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(DomainUser::from))
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &DomainNewUser) -> RepositoryResult<DomainUser> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let insertable = DbNewUser::from(new_user);

        let created = diesel::insert_into(users::table)
            .values(&insertable)
            .get_result::<DbUser>(&mut conn)?;

        Ok(created.into())
    }

    fn issue_token(&self, new_token: &DomainNewAuthToken) -> RepositoryResult<DomainAuthToken> {
        use crate::schema::auth_tokens;

        let mut conn = self.conn()?;

        let existing = auth_tokens::table
            .filter(auth_tokens::user_id.eq(new_token.user_id))
            .first::<DbAuthToken>(&mut conn)
            .optional()?;

        if let Some(token) = existing {
            return Ok(token.into());
        }

        let insertable = DbNewAuthToken::from(new_token);
        let created = diesel::insert_into(auth_tokens::table)
            .values(&insertable)
            .get_result::<DbAuthToken>(&mut conn)?;

        Ok(created.into())
    }
}
