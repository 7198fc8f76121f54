//! Service-level test support backed by a real `PostgreSQL` container.


pub(crate) use context::TestContext;
