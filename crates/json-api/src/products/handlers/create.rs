//! Create Product Handler

use salvo::{http::header::LOCATION, prelude::*};
use tracing::info;

use crate::{
    extensions::*,
    products::{
        body::{ProductBody, created_location, parse_product_body},
        errors::into_status_error,
    },
};

/// Create Product Handler
///
/// Expects a `Product` JSON body with a caller-chosen `ProductId`.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    request_body = ProductBody,
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductBody>, StatusError> {
    let state = depot.state_or_500()?;
    let body = parse_product_body(req).await?;

    let product = state
        .products()
        .create_product(body.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, created_location(req, product.product_id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    info!(product_id = product.product_id, "created product");

    Ok(Json(product.into()))
}
