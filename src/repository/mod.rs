use crate::db::{DbConnection, DbPool};
use crate::domain::competitor::{Competitor, NewCompetitor};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::{CompetitorId, CompetitorUrl, ProductSku};

pub mod competitor;
pub mod errors;
pub mod product;

use errors::RepositoryResult;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for products.
pub trait ProductReader {
    /// Retrieve a product by its SKU.
    fn get_product_by_sku(&self, sku: &ProductSku) -> RepositoryResult<Option<Product>>;
    /// List all products ordered by SKU.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}

/// Write operations for products.
pub trait ProductWriter {
    /// Persist a new product.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<usize>;
    /// Delete a product. Its competitor listings are removed with it.
    fn delete_product(&self, sku: &ProductSku) -> RepositoryResult<usize>;
}

/// Read-only operations for competitor listings.
pub trait CompetitorReader {
    /// List the competitor listings attached to a product.
    fn list_competitors(&self, sku: &ProductSku) -> RepositoryResult<Vec<Competitor>>;
    /// Retrieve a competitor listing by its URL.
    fn get_competitor_by_url(&self, url: &CompetitorUrl) -> RepositoryResult<Option<Competitor>>;
}

/// Write operations for competitor listings.
pub trait CompetitorWriter {
    /// Persist a new competitor listing, returning the stored row.
    fn create_competitor(&self, competitor: &NewCompetitor) -> RepositoryResult<Competitor>;
    /// Remove a competitor listing by identifier.
    fn delete_competitor(&self, id: CompetitorId) -> RepositoryResult<usize>;
}
