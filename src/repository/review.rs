use diesel::prelude::*;

use crate::domain::review::{NewReview as DomainNewReview, Review as DomainReview};
use crate::models::review::{NewReview as DbNewReview, Review as DbReview};
use crate::repository::{DieselRepository, RepositoryResult, ReviewReader, ReviewWriter};

impl ReviewReader for DieselRepository {
    fn list_reviews(&self, product_id: i32) -> RepositoryResult<Vec<DomainReview>> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let rows = reviews::table
            .filter(reviews::product_id.eq(product_id))
            .order(reviews::id.asc())
            .load::<DbReview>(&mut conn)?;

        Ok(rows.into_iter().map(DomainReview::from).collect())
    }
}

impl ReviewWriter for DieselRepository {
    fn create_review(&self, new_review: &DomainNewReview) -> RepositoryResult<DomainReview> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let insertable = DbNewReview::from(new_review);

        let created = diesel::insert_into(reviews::table)
            .values(&insertable)
            .get_result::<DbReview>(&mut conn)?;

        Ok(created.into())
    }
}
