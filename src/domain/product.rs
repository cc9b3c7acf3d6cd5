use serde::{Deserialize, Serialize};

use crate::domain::types::{ProductCost, ProductName, ProductSku};

/// A product whose price is tracked against competitor listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub sku: ProductSku,
    pub name: ProductName,
    /// What the owner pays for the product, not a sale price.
    pub cost: ProductCost,
}

/// Information required to create a new [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub sku: ProductSku,
    pub name: ProductName,
    pub cost: ProductCost,
}
