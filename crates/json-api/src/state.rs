//! State

use std::sync::Arc;

use inventory_app::{context::AppContext, domain::products::ProductsService};

/// Immutable per-process state shared by every request.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext) -> Self {
        Self { app }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app))
    }

    pub(crate) fn products(&self) -> &dyn ProductsService {
        self.app.products.as_ref()
    }
}
