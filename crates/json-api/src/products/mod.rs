//! Products

mod body;
mod errors;
mod handlers;

pub(crate) use handlers::*;

use salvo::{Request, http::StatusError};

/// Product id from the path. Digit segments outside the `i32` range address no product.
fn path_product_id(req: &Request) -> Result<i32, StatusError> {
    req.param::<i32>("id").ok_or_else(StatusError::not_found)
}
