//! Products Repository

use sqlx::{FromRow, PgConnection, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::products::{
    data::{NewProduct, ProductUpdate},
    records::{ProductId, ProductRecord},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        conn: &mut PgConnection,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(conn)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        conn: &mut PgConnection,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product)
            .fetch_optional(conn)
            .await
    }

    pub(crate) async fn product_exists(
        &self,
        conn: &mut PgConnection,
        product: ProductId,
    ) -> Result<bool, sqlx::Error> {
        let count: Option<i64> = query_scalar(COUNT_PRODUCTS_SQL)
            .bind(product)
            .fetch_one(conn)
            .await?;

        Ok(count.unwrap_or_default() > 0)
    }

    pub(crate) async fn create_product(
        &self,
        conn: &mut PgConnection,
        product: &NewProduct,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CREATE_PRODUCT_SQL)
            .bind(product.product_id)
            .bind(product.name.as_deref())
            .bind(product.price)
            .bind(product.stock)
            .execute(conn)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn update_product(
        &self,
        conn: &mut PgConnection,
        product: ProductId,
        update: &ProductUpdate,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_PRODUCT_SQL)
            .bind(product)
            .bind(update.name.as_deref())
            .bind(update.price)
            .bind(update.stock)
            .execute(conn)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_product(
        &self,
        conn: &mut PgConnection,
        product: ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product)
            .execute(conn)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product_id: row.try_get("ProductId")?,
            name: row.try_get("Name")?,
            price: row.try_get("Price")?,
            stock: row.try_get("Stock")?,
        })
    }
}
