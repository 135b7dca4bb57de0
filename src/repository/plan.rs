use diesel::prelude::*;

use crate::{
    domain::plan::{NewPlan, PricingPlan, UpdatePlan},
    repository::{DieselRepository, PlanReader, PlanWriter, errors::RepositoryResult},
};

impl PlanReader for DieselRepository {
    fn get_plan_by_id(&self, id: i32) -> RepositoryResult<Option<PricingPlan>> {
        use crate::models::plan::PricingPlan as DbPlan;
        use crate::schema::pricing_plans;

        let mut conn = self.conn()?;
        let plan = pricing_plans::table
            .find(id)
            .first::<DbPlan>(&mut conn)
            .optional()?;

        Ok(plan.map(Into::into))
    }

    fn list_plans(&self) -> RepositoryResult<Vec<PricingPlan>> {
        use crate::models::plan::PricingPlan as DbPlan;
        use crate::schema::pricing_plans;

        let mut conn = self.conn()?;
        let items = pricing_plans::table
            .order(pricing_plans::price_cents.asc())
            .load::<DbPlan>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl PlanWriter for DieselRepository {
    fn create_plan(&self, new_plan: &NewPlan) -> RepositoryResult<PricingPlan> {
        use crate::models::plan::{NewPlan as DbNewPlan, PricingPlan as DbPlan};
        use crate::schema::pricing_plans;

        let mut conn = self.conn()?;
        let insertable: DbNewPlan = new_plan.into();
        let created = diesel::insert_into(pricing_plans::table)
            .values(&insertable)
            .get_result::<DbPlan>(&mut conn)?;

        Ok(created.into())
    }

    fn update_plan(&self, plan_id: i32, updates: &UpdatePlan) -> RepositoryResult<PricingPlan> {
        use crate::models::plan::{PricingPlan as DbPlan, UpdatePlan as DbUpdatePlan};
        use crate::schema::pricing_plans;

        let mut conn = self.conn()?;
        let db_updates: DbUpdatePlan = updates.into();

        let updated = diesel::update(pricing_plans::table.find(plan_id))
            .set(&db_updates)
            .get_result::<DbPlan>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_plan(&self, plan_id: i32) -> RepositoryResult<()> {
        use crate::schema::pricing_plans;

        let mut conn = self.conn()?;
        diesel::delete(pricing_plans::table.find(plan_id)).execute(&mut conn)?;
        Ok(())
    }
}
