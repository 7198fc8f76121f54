//! Products Data

use crate::domain::products::{
    errors::ProductsServiceError,
    records::{ProductId, ProductRecord},
};

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub product_id: ProductId,
    pub name: Option<String>,
    pub price: i32,
    pub stock: i32,
}

impl NewProduct {
    /// Check the caller-supplied identifier before anything touches the store.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::InvalidProductId`] unless the id is greater than zero.
    pub fn validate(&self) -> Result<(), ProductsServiceError> {
        if self.product_id <= 0 {
            return Err(ProductsServiceError::InvalidProductId);
        }

        Ok(())
    }
}

impl From<NewProduct> for ProductRecord {
    fn from(product: NewProduct) -> Self {
        ProductRecord {
            product_id: product.product_id,
            name: product.name,
            price: product.price,
            stock: product.stock,
        }
    }
}

/// Product Update Data
///
/// Carries the id found in the request body; it never rewrites the stored id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdate {
    pub product_id: ProductId,
    pub name: Option<String>,
    pub price: i32,
    pub stock: i32,
}

impl ProductUpdate {
    /// Ensure the body id addresses the same product as the path.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::IdMismatch`] when the ids differ.
    pub fn ensure_matches(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        if self.product_id != product {
            return Err(ProductsServiceError::IdMismatch);
        }

        Ok(())
    }
}
