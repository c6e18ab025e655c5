use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::Category as DomainCategory;
use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery,
    UpdateProduct as DomainUpdateProduct,
};
use crate::domain::review::Review as DomainReview;
use crate::domain::tag::Tag as DomainTag;
use crate::models::category::Category as DbCategory;
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
};
use crate::models::product_tag::NewProductTag as DbNewProductTag;
use crate::models::review::Review as DbReview;
use crate::models::tag::Tag as DbTag;
use crate::repository::{DieselRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, product_id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(product_id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        match product {
            Some(db_product) => {
                let mut hydrated = hydrate_products(&mut conn, vec![db_product])?;
                Ok(hydrated.pop())
            }
            None => Ok(None),
        }
    }

    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainProduct>)> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut count_query = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref().filter(|term| !term.is_empty()) {
            let pattern = format!("%{term}%");
            count_query = count_query.filter(products::title.like(pattern));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = products::table
            .order(products::id.asc())
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref().filter(|term| !term.is_empty()) {
            let pattern = format!("%{term}%");
            items = items.filter(products::title.like(pattern));
        }

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(pagination.offset() as i64)
                .limit(pagination.per_page as i64);
        }

        let db_products = items.load::<DbProduct>(&mut conn)?;
        let products = hydrate_products(&mut conn, db_products)?;

        Ok((total, products))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::from(new_product);

        let created = conn.transaction(|conn| {
            let created = diesel::insert_into(products::table)
                .values(&db_new)
                .get_result::<DbProduct>(conn)?;

            insert_tag_links(conn, created.id, &new_product.tag_ids)?;

            Ok::<_, diesel::result::Error>(created)
        })?;

        let mut hydrated = hydrate_products(&mut conn, vec![created])?;
        hydrated.pop().ok_or(RepositoryError::NotFound)
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::{product_tags, products};

        let mut conn = self.conn()?;
        let db_updates = DbUpdateProduct::from(updates);

        let updated = conn.transaction(|conn| {
            let target = products::table.filter(products::id.eq(product_id));
            let updated = diesel::update(target)
                .set(&db_updates)
                .get_result::<DbProduct>(conn)?;

            diesel::delete(product_tags::table.filter(product_tags::product_id.eq(product_id)))
                .execute(conn)?;
            insert_tag_links(conn, product_id, &updates.tag_ids)?;

            Ok::<_, diesel::result::Error>(updated)
        })?;

        let mut hydrated = hydrate_products(&mut conn, vec![updated])?;
        hydrated.pop().ok_or(RepositoryError::NotFound)
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let target = products::table.filter(products::id.eq(product_id));

        let deleted = diesel::delete(target).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Insert join rows one by one so their ids preserve assignment order.
fn insert_tag_links(
    conn: &mut SqliteConnection,
    product_id: i32,
    tag_ids: &[i32],
) -> Result<(), diesel::result::Error> {
    use crate::schema::product_tags;

    for &tag_id in tag_ids {
        diesel::insert_into(product_tags::table)
            .values(&DbNewProductTag { product_id, tag_id })
            .execute(conn)?;
    }

    Ok(())
}

/// Attach categories, tags and reviews to the given product rows.
fn hydrate_products(
    conn: &mut SqliteConnection,
    db_products: Vec<DbProduct>,
) -> RepositoryResult<Vec<DomainProduct>> {
    if db_products.is_empty() {
        return Ok(Vec::new());
    }

    let product_ids: Vec<i32> = db_products.iter().map(|product| product.id).collect();
    let categories = load_categories(conn, &db_products)?;
    let mut tag_map = load_tags_for_products(conn, &product_ids)?;
    let mut review_map = load_reviews_for_products(conn, &product_ids)?;

    let mut domain_products = Vec::with_capacity(db_products.len());
    for db_product in db_products {
        let mut domain: DomainProduct = db_product.into();
        domain.category = domain
            .category_id
            .and_then(|category_id| categories.get(&category_id).cloned());
        domain.tags = tag_map.remove(&domain.id).unwrap_or_default();
        domain.reviews = review_map.remove(&domain.id).unwrap_or_default();
        domain_products.push(domain);
    }

    Ok(domain_products)
}

fn load_categories(
    conn: &mut SqliteConnection,
    db_products: &[DbProduct],
) -> RepositoryResult<HashMap<i32, DomainCategory>> {
    use crate::schema::categories;

    let category_ids: Vec<i32> = db_products
        .iter()
        .filter_map(|product| product.category_id)
        .collect();

    if category_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = categories::table
        .filter(categories::id.eq_any(&category_ids))
        .load::<DbCategory>(conn)?;

    Ok(rows
        .into_iter()
        .map(|category| (category.id, category.into()))
        .collect())
}

fn load_tags_for_products(
    conn: &mut SqliteConnection,
    product_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainTag>>> {
    use crate::schema::{product_tags, tags};

    let rows = product_tags::table
        .inner_join(tags::table)
        .filter(product_tags::product_id.eq_any(product_ids))
        .order(product_tags::id.asc())
        .select((product_tags::product_id, DbTag::as_select()))
        .load::<(i32, DbTag)>(conn)?;

    let mut map: HashMap<i32, Vec<DomainTag>> = HashMap::new();
    for (product_id, tag) in rows {
        map.entry(product_id).or_default().push(tag.into());
    }

    Ok(map)
}

fn load_reviews_for_products(
    conn: &mut SqliteConnection,
    product_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainReview>>> {
    use crate::schema::reviews;

    let rows = reviews::table
        .filter(reviews::product_id.eq_any(product_ids))
        .order(reviews::id.asc())
        .load::<DbReview>(conn)?;

    let mut map: HashMap<i32, Vec<DomainReview>> = HashMap::new();
    for row in rows {
        map.entry(row.product_id).or_default().push(row.into());
    }

    Ok(map)
}
