use diesel::prelude::*;

use crate::domain::competitor::{Competitor, NewCompetitor};
use crate::domain::types::{CompetitorId, CompetitorUrl, ProductSku};
use crate::models::competitor::{Competitor as DbCompetitor, NewCompetitor as DbNewCompetitor};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CompetitorReader, CompetitorWriter, DieselRepository};

impl CompetitorReader for DieselRepository {
    fn list_competitors(&self, sku: &ProductSku) -> RepositoryResult<Vec<Competitor>> {
        use crate::schema::competitors;

        let mut conn = self.conn()?;

        let results = competitors::table
            .filter(competitors::product_sku.eq(sku.as_str()))
            .order(competitors::id.asc())
            .load::<DbCompetitor>(&mut conn)?;

        let results = results
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Competitor>, _>>()?;
        Ok(results)
    }

    fn get_competitor_by_url(&self, url: &CompetitorUrl) -> RepositoryResult<Option<Competitor>> {
        use crate::schema::competitors;

        let mut conn = self.conn()?;

        let competitor = competitors::table
            .filter(competitors::url.eq(url.as_str()))
            .first::<DbCompetitor>(&mut conn)
            .optional()?;

        let competitor = competitor.map(TryInto::try_into).transpose()?;
        Ok(competitor)
    }
}

impl CompetitorWriter for DieselRepository {
    fn create_competitor(&self, competitor: &NewCompetitor) -> RepositoryResult<Competitor> {
        use crate::schema::competitors;

        let mut conn = self.conn()?;

        let db_competitor = DbNewCompetitor::from(competitor);
        let created = diesel::insert_into(competitors::table)
            .values(&db_competitor)
            .get_result::<DbCompetitor>(&mut conn)?;
        Ok(created.try_into()?)
    }

    fn delete_competitor(&self, id: CompetitorId) -> RepositoryResult<usize> {
        use crate::schema::competitors;

        let mut conn = self.conn()?;

        let affected = diesel::delete(competitors::table.filter(competitors::id.eq(id.get())))
            .execute(&mut conn)?;
        Ok(affected)
    }
}
