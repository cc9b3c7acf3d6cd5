use diesel::prelude::*;

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::domain::types::{ProductCost, ProductName, ProductSku, TypeConstraintError};

/// Diesel model representing a row in the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
#[diesel(primary_key(sku))]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub cost: f64,
}

/// Insertable form of [`Product`] used for creating new rows.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub sku: &'a str,
    pub name: &'a str,
    pub cost: f64,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            sku: ProductSku::new(product.sku)?,
            name: ProductName::new(product.name)?,
            cost: ProductCost::new(product.cost)?,
        })
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(product: &'a DomainNewProduct) -> Self {
        Self {
            sku: product.sku.as_str(),
            name: product.name.as_str(),
            cost: product.cost.get(),
        }
    }
}
