use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductSku;
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProductReader, ProductWriter};

impl ProductReader for DieselRepository {
    fn get_product_by_sku(&self, sku: &ProductSku) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::sku.eq(sku.as_str()))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }

    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let results = products::table
            .order(products::sku.asc())
            .load::<DbProduct>(&mut conn)?;

        let results = results
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;
        Ok(results)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let db_product = DbNewProduct::from(product);
        let affected = diesel::insert_into(products::table)
            .values(&db_product)
            .execute(&mut conn)?;
        Ok(affected)
    }

    fn delete_product(&self, sku: &ProductSku) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        // The competitors FK is ON DELETE CASCADE, so listings go with the row.
        let affected = diesel::delete(products::table.filter(products::sku.eq(sku.as_str())))
            .execute(&mut conn)?;
        Ok(affected)
    }
}
