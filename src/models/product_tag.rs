use diesel::prelude::*;

/// Join row linking a product to a tag.
///
/// Rows are only ever inserted and bulk-deleted; reads go through a join
/// in the product repository, ordered by id to preserve assignment order.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_tags)]
pub struct NewProductTag {
    pub product_id: i32,
    pub tag_id: i32,
}
