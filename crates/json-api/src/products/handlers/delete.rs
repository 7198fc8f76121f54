//! Delete Product Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::into_status_error, path_product_id},
};

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    parameters(("id" = i32, Path, description = "Product id")),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;
    let id = path_product_id(req)?;

    state
        .products()
        .delete_product(id)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
