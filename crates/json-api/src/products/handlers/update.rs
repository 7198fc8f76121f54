//! Update Product Handler

use salvo::prelude::*;
use tracing::info;

use crate::{
    extensions::*,
    products::{
        body::{ProductBody, parse_product_body},
        errors::into_status_error,
        path_product_id,
    },
};

/// Product Update Handler
///
/// Replaces name, price and stock. The body `ProductId` must match the path.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    parameters(("id" = i32, Path, description = "Product id")),
    request_body = ProductBody,
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(req, depot),
    fields(product_id = tracing::field::Empty),
    err(level = "warn")
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;
    let product = path_product_id(req)?;

    tracing::Span::current().record("product_id", product);

    let body = parse_product_body(req).await?;

    state
        .products()
        .update_product(product, body.into())
        .await
        .map_err(into_status_error)?;

    info!(product_id = product, "updated product");

    Ok(StatusCode::NO_CONTENT)
}
