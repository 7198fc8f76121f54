//! Product Index Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{body::ProductBody, errors::into_status_error},
};

/// Product Index Handler
///
/// Returns every product. No ordering is guaranteed.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "All products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductBody>>, StatusError> {
    let state = depot.state_or_500()?;

    let products = state
        .products()
        .list_products()
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
