use diesel::prelude::*;

use crate::{
    domain::lead::{Lead, LeadStatus, NewLead},
    repository::{DieselRepository, LeadReader, LeadWriter, errors::RepositoryResult},
};

impl LeadReader for DieselRepository {
    fn get_lead_by_id(&self, id: i32) -> RepositoryResult<Option<Lead>> {
        use crate::models::lead::Lead as DbLead;
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let lead = leads::table.find(id).first::<DbLead>(&mut conn).optional()?;

        Ok(lead.map(Into::into))
    }

    fn list_leads(&self) -> RepositoryResult<Vec<Lead>> {
        use crate::models::lead::Lead as DbLead;
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let items = leads::table
            .order((leads::created_at.desc(), leads::id.desc()))
            .load::<DbLead>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl LeadWriter for DieselRepository {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead> {
        use crate::models::lead::{Lead as DbLead, NewLead as DbNewLead};
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let insertable: DbNewLead = new_lead.into();
        let created = diesel::insert_into(leads::table)
            .values(&insertable)
            .get_result::<DbLead>(&mut conn)?;

        Ok(created.into())
    }

    fn update_lead_status(&self, lead_id: i32, status: LeadStatus) -> RepositoryResult<Lead> {
        use crate::models::lead::Lead as DbLead;
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let updated = diesel::update(leads::table.find(lead_id))
            .set((
                leads::status.eq(status.to_string()),
                leads::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .get_result::<DbLead>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_lead(&self, lead_id: i32) -> RepositoryResult<()> {
        use crate::schema::leads;

        let mut conn = self.conn()?;
        diesel::delete(leads::table.find(lead_id)).execute(&mut conn)?;
        Ok(())
    }
}
