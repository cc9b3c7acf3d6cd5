use serde::{Deserialize, Serialize};

use crate::domain::types::{CompetitorId, CompetitorName, CompetitorUrl, ProductSku};

/// A competitor's listing of a tracked product.
///
/// Listings are owned by their product: deleting the product removes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: CompetitorName,
    pub url: CompetitorUrl,
    pub product_sku: ProductSku,
}

/// Information required to create a new [`Competitor`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCompetitor {
    pub name: CompetitorName,
    pub url: CompetitorUrl,
    pub product_sku: ProductSku,
}
