//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use inventory_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::InvalidProductId | ProductsServiceError::IdMismatch => {
            StatusError::bad_request().brief(error.to_string())
        }
        ProductsServiceError::NotFound => StatusError::not_found(),
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::InsertFailed | ProductsServiceError::Sql(_) => {
            error!("product store fault: {error}");

            StatusError::internal_server_error().brief(error.to_string())
        }
    }
}
