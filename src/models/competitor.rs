use diesel::prelude::*;

use crate::domain::competitor::{Competitor as DomainCompetitor, NewCompetitor as DomainNewCompetitor};
use crate::domain::types::{CompetitorId, CompetitorName, CompetitorUrl, ProductSku, TypeConstraintError};

/// Diesel model representing a row in the `competitors` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::competitors)]
pub struct Competitor {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub product_sku: String,
}

/// Insertable form of [`Competitor`] used for creating new rows.
///
/// The `id` column is assigned by SQLite.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::competitors)]
pub struct NewCompetitor<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub product_sku: &'a str,
}

impl TryFrom<Competitor> for DomainCompetitor {
    type Error = TypeConstraintError;

    fn try_from(competitor: Competitor) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CompetitorId::new(competitor.id)?,
            name: CompetitorName::new(competitor.name)?,
            url: CompetitorUrl::new(competitor.url)?,
            product_sku: ProductSku::new(competitor.product_sku)?,
        })
    }
}

impl<'a> From<&'a DomainNewCompetitor> for NewCompetitor<'a> {
    fn from(competitor: &'a DomainNewCompetitor) -> Self {
        Self {
            name: competitor.name.as_str(),
            url: competitor.url.as_str(),
            product_sku: competitor.product_sku.as_str(),
        }
    }
}
