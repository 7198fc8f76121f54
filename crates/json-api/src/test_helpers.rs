//! Test helpers.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, PoisonError},
};

use async_trait::async_trait;
use salvo::{affix_state::inject, prelude::*};

use inventory_app::{
    context::AppContext,
    domain::products::{
        MockProductsService, ProductsService, ProductsServiceError,
        data::{NewProduct, ProductUpdate},
        records::{ProductId, ProductRecord},
    },
};

use crate::state::State;

pub(crate) fn make_product(product_id: ProductId) -> ProductRecord {
    ProductRecord {
        product_id,
        name: Some("Pen".to_string()),
        price: 10,
        stock: 100,
    }
}

pub(crate) fn state_with(products: impl ProductsService + 'static) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
    })
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state_with(products))).push(route))
}

/// Store-free stand-in honouring the same outcomes as the `PostgreSQL` service.
#[derive(Debug, Default)]
pub(crate) struct InMemoryProductsService {
    rows: Mutex<BTreeMap<ProductId, ProductRecord>>,
}

impl InMemoryProductsService {
    fn with_rows<T>(&self, f: impl FnOnce(&mut BTreeMap<ProductId, ProductRecord>) -> T) -> T {
        f(&mut self.rows.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

#[async_trait]
impl ProductsService for InMemoryProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self.with_rows(|rows| rows.values().cloned().collect()))
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        self.with_rows(|rows| rows.get(&product).cloned())
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        product.validate()?;

        self.with_rows(|rows| {
            if rows.contains_key(&product.product_id) {
                return Err(ProductsServiceError::AlreadyExists);
            }

            let record = ProductRecord::from(product);

            rows.insert(record.product_id, record.clone());

            Ok(record)
        })
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<(), ProductsServiceError> {
        update.ensure_matches(product)?;

        self.with_rows(|rows| {
            let row = rows
                .get_mut(&product)
                .ok_or(ProductsServiceError::NotFound)?;

            row.name = update.name;
            row.price = update.price;
            row.stock = update.stock;

            Ok(())
        })
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        self.with_rows(|rows| rows.remove(&product))
            .map(drop)
            .ok_or(ProductsServiceError::NotFound)
    }
}
