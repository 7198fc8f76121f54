//! Inventory Domain Concerns

pub mod products;
