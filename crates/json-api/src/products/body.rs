//! Product request and response bodies.

use salvo::{
    http::{StatusError, header::HOST},
    oapi::ToSchema,
    prelude::Request,
};
use serde::{Deserialize, Serialize};

use inventory_app::domain::products::{
    data::{NewProduct, ProductUpdate},
    records::ProductRecord,
};

/// Product as exchanged over HTTP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub(crate) struct ProductBody {
    /// Caller-supplied identifier, greater than zero
    pub product_id: i32,

    /// Display name
    pub name: Option<String>,

    /// Unit price
    pub price: i32,

    /// Units in stock
    pub stock: i32,
}

impl From<ProductRecord> for ProductBody {
    fn from(product: ProductRecord) -> Self {
        ProductBody {
            product_id: product.product_id,
            name: product.name,
            price: product.price,
            stock: product.stock,
        }
    }
}

impl From<ProductBody> for NewProduct {
    fn from(body: ProductBody) -> Self {
        NewProduct {
            product_id: body.product_id,
            name: body.name,
            price: body.price,
            stock: body.stock,
        }
    }
}

impl From<ProductBody> for ProductUpdate {
    fn from(body: ProductBody) -> Self {
        ProductUpdate {
            product_id: body.product_id,
            name: body.name,
            price: body.price,
            stock: body.stock,
        }
    }
}

/// Read the product payload, treating an empty body or JSON `null` as missing.
pub(crate) async fn parse_product_body(req: &mut Request) -> Result<ProductBody, StatusError> {
    let payload = req
        .payload()
        .await
        .map_err(|error| StatusError::bad_request().brief(format!("unreadable body: {error}")))?;

    if payload.iter().all(u8::is_ascii_whitespace) {
        return Err(body_required());
    }

    serde_json::from_slice::<Option<ProductBody>>(payload)
        .map_err(|error| StatusError::bad_request().brief(format!("invalid product body: {error}")))?
        .ok_or_else(body_required)
}

fn body_required() -> StatusError {
    StatusError::bad_request().brief("Product body required")
}

/// Location of a created product: the collection URI without trailing slashes, then the id.
pub(crate) fn created_location(req: &Request, product_id: i32) -> String {
    let uri = req.uri();
    let path = uri.path().trim_end_matches('/');

    let host = uri
        .authority()
        .map(ToString::to_string)
        .or_else(|| req.header::<String>(HOST));

    // Origin-form URIs carry no scheme; the listener's scheme is on the request.
    let scheme = uri.scheme_str().unwrap_or_else(|| req.scheme().as_str());

    match host {
        Some(host) => format!("{scheme}://{host}{path}/{product_id}"),
        None => format!("{path}/{product_id}"),
    }
}
