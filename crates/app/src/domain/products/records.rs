//! Product Records

/// Product identifier, supplied by the caller on create.
pub type ProductId = i32;

/// Product Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub product_id: ProductId,
    pub name: Option<String>,
    pub price: i32,
    pub stock: i32,
}
