//! App Router

use std::{sync::Arc, time::Duration};

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
};

use crate::{healthcheck, observability::RequestLogging, products, state::State};

/// Routes for the product collection under `api/products`.
pub(crate) fn products_router() -> Router {
    Router::with_path("api/products")
        .get(products::index::handler)
        .post(products::create::handler)
        .push(
            Router::with_path("{id:num}")
                .get(products::get::handler)
                .put(products::update::handler)
                .delete(products::delete::handler),
        )
}

/// Full application router with shared state, request logging and API docs.
pub(crate) fn app_router(state: Arc<State>, slow_request_threshold: Duration) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(RequestLogging::new(slow_request_threshold))
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(products_router());

    let doc = OpenApi::new("Inventory API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"))
}
