//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductUpdate},
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut conn = self.db.connection().await?;

        let products = self.repository.list_products(&mut conn).await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        let mut conn = self.db.connection().await?;

        self.repository
            .get_product(&mut conn, product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        product.validate()?;

        // The primary key still guards a create that races past the existence check.
        let mut tx = self.db.begin().await?;

        if self
            .repository
            .product_exists(&mut tx, product.product_id)
            .await?
        {
            debug!(product_id = product.product_id, "product already exists");

            return Err(ProductsServiceError::AlreadyExists);
        }

        let rows_affected = self.repository.create_product(&mut tx, &product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::InsertFailed);
        }

        tx.commit().await?;

        Ok(product.into())
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<(), ProductsServiceError> {
        update.ensure_matches(product)?;

        let mut conn = self.db.connection().await?;

        let rows_affected = self
            .repository
            .update_product(&mut conn, product, &update)
            .await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        let mut conn = self.db.connection().await?;

        let rows_affected = self.repository.delete_product(&mut conn, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, in whatever order the store returns them.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product with a caller-supplied id.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Replaces the name, price and stock of an existing product.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<(), ProductsServiceError>;

    /// Deletes a product.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn pen() -> NewProduct {
        NewProduct {
            product_id: 1,
            name: Some("Pen".to_string()),
            price: 10,
            stock: 100,
        }
    }

    #[tokio::test]
    async fn create_product_returns_supplied_values() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx.products.create_product(pen()).await?;

        assert_eq!(product, ProductRecord::from(pen()));

        Ok(())
    }

    #[tokio::test]
    async fn get_product_returns_created_product() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(pen()).await?;

        let product = ctx.products.get_product(1).await?;

        assert_eq!(product, ProductRecord::from(pen()));

        Ok(())
    }

    #[tokio::test]
    async fn create_product_stores_null_name() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products
            .create_product(NewProduct {
                product_id: 5,
                name: None,
                price: 0,
                stock: 0,
            })
            .await?;

        let product = ctx.products.get_product(5).await?;

        assert!(product.name.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.get_product(42).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_products_returns_created_products() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(pen()).await?;
        ctx.products
            .create_product(NewProduct {
                product_id: 2,
                name: Some("Pencil".to_string()),
                price: 5,
                stock: 20,
            })
            .await?;

        let products = ctx.products.list_products().await?;

        let mut ids: Vec<ProductId> = products.iter().map(|p| p.product_id).collect();

        ids.sort_unstable();

        assert_eq!(ids, vec![1, 2]);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_empty_when_none_created() -> TestResult {
        let ctx = TestContext::new().await;

        let products = ctx.products.list_products().await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn create_product_duplicate_id_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(pen()).await?;

        let result = ctx
            .products
            .create_product(NewProduct {
                name: Some("Marker".to_string()),
                price: 99,
                ..pen()
            })
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        let stored = ctx.products.get_product(1).await?;

        assert_eq!(stored, ProductRecord::from(pen()), "existing row must be unchanged");

        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn create_product_concurrent_duplicates_yield_one_conflict() -> TestResult {
        let ctx = TestContext::new().await;

        let (first, second) = tokio::join!(
            ctx.products.create_product(pen()),
            ctx.products.create_product(pen()),
        );

        let outcomes = [first, second];
        let created = outcomes.iter().filter(|result| result.is_ok()).count();
        let conflicts = outcomes
            .iter()
            .filter(|result| matches!(result, Err(ProductsServiceError::AlreadyExists)))
            .count();

        assert_eq!((created, conflicts), (1, 1), "outcomes: {outcomes:?}");
        assert_eq!(ctx.products.list_products().await?, vec![ProductRecord::from(pen())]);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_rejects_non_positive_id_without_writing() -> TestResult {
        let ctx = TestContext::new().await;

        for product_id in [0, -3] {
            let result = ctx
                .products
                .create_product(NewProduct {
                    product_id,
                    ..pen()
                })
                .await;

            assert!(
                matches!(result, Err(ProductsServiceError::InvalidProductId)),
                "expected InvalidProductId, got {result:?}"
            );
        }

        assert!(ctx.products.list_products().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn update_product_replaces_values() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(pen()).await?;

        ctx.products
            .update_product(
                1,
                ProductUpdate {
                    product_id: 1,
                    name: Some("Pen".to_string()),
                    price: 12,
                    stock: 90,
                },
            )
            .await?;

        let product = ctx.products.get_product(1).await?;

        assert_eq!(product.price, 12);
        assert_eq!(product.stock, 90);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_id_mismatch_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(pen()).await?;

        let result = ctx
            .products
            .update_product(
                1,
                ProductUpdate {
                    product_id: 2,
                    name: None,
                    price: 1,
                    stock: 1,
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::IdMismatch)),
            "expected IdMismatch, got {result:?}"
        );

        assert_eq!(ctx.products.get_product(1).await?, ProductRecord::from(pen()));

        Ok(())
    }

    #[tokio::test]
    async fn update_product_unknown_id_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .update_product(
                9,
                ProductUpdate {
                    product_id: 9,
                    name: None,
                    price: 1,
                    stock: 1,
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        assert!(ctx.products.list_products().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_twice_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(pen()).await?;
        ctx.products.delete_product(1).await?;

        let result = ctx.products.delete_product(1).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        let result = ctx.products.get_product(1).await;

        assert!(matches!(result, Err(ProductsServiceError::NotFound)));

        Ok(())
    }
}
