use diesel::prelude::*;

use crate::domain::tag::{
    NewTag as DomainNewTag, Tag as DomainTag, TagListQuery, UpdateTag as DomainUpdateTag,
};
use crate::models::tag::{NewTag as DbNewTag, Tag as DbTag, UpdateTag as DbUpdateTag};
use crate::repository::{DieselRepository, RepositoryError, RepositoryResult, TagReader, TagWriter};

impl TagReader for DieselRepository {
    fn get_tag_by_id(&self, tag_id: i32) -> RepositoryResult<Option<DomainTag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let tag = tags::table
            .filter(tags::id.eq(tag_id))
            .first::<DbTag>(&mut conn)
            .optional()?;

        Ok(tag.map(DomainTag::from))
    }

    fn get_tags_by_ids(&self, tag_ids: &[i32]) -> RepositoryResult<Vec<DomainTag>> {
        use crate::schema::tags;

        if tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;
        let db_tags = tags::table
            .filter(tags::id.eq_any(tag_ids))
            .load::<DbTag>(&mut conn)?;

        Ok(db_tags.into_iter().map(DomainTag::from).collect())
    }

    fn list_tags(&self, query: TagListQuery) -> RepositoryResult<(usize, Vec<DomainTag>)> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let total = tags::table.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = tags::table
            .order(tags::name.asc())
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(pagination.offset() as i64)
                .limit(pagination.per_page as i64);
        }

        let db_tags = items.load::<DbTag>(&mut conn)?;
        let tags = db_tags.into_iter().map(DomainTag::from).collect();

        Ok((total, tags))
    }
}

impl TagWriter for DieselRepository {
    fn create_tag(&self, new_tag: &DomainNewTag) -> RepositoryResult<DomainTag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let insertable = DbNewTag::from(new_tag);

        let created = diesel::insert_into(tags::table)
            .values(&insertable)
            .get_result::<DbTag>(&mut conn)?;

        Ok(created.into())
    }

    fn update_tag(&self, tag_id: i32, updates: &DomainUpdateTag) -> RepositoryResult<DomainTag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateTag::from(updates);

        let target = tags::table.filter(tags::id.eq(tag_id));

        let updated = diesel::update(target)
            .set(&db_updates)
            .get_result::<DbTag>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let target = tags::table.filter(tags::id.eq(tag_id));

        let deleted = diesel::delete(target).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
