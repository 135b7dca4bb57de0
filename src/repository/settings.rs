use diesel::prelude::*;

use crate::{
    domain::settings::SiteSettings,
    repository::{DieselRepository, SettingsReader, SettingsWriter, errors::RepositoryResult},
};

impl SettingsReader for DieselRepository {
    fn get_settings(&self) -> RepositoryResult<SiteSettings> {
        use crate::models::settings::{SETTINGS_ROW_ID, SiteSettings as DbSettings};
        use crate::schema::site_settings;

        let mut conn = self.conn()?;
        let row = site_settings::table
            .find(SETTINGS_ROW_ID)
            .first::<DbSettings>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(row.into()),
            None => {
                // First read on a fresh database: seed the defaults so the
                // admin form always has a row to update.
                let defaults = SiteSettings::default();
                let insertable: DbSettings = (&defaults).into();
                diesel::insert_into(site_settings::table)
                    .values(&insertable)
                    .execute(&mut conn)?;
                Ok(defaults)
            }
        }
    }
}

impl SettingsWriter for DieselRepository {
    fn save_settings(&self, settings: &SiteSettings) -> RepositoryResult<()> {
        use crate::models::settings::{SETTINGS_ROW_ID, SiteSettings as DbSettings};
        use crate::schema::site_settings;

        let mut conn = self.conn()?;
        let row: DbSettings = settings.into();

        let updated = diesel::update(site_settings::table.find(SETTINGS_ROW_ID))
            .set(&row)
            .execute(&mut conn)?;

        if updated == 0 {
            diesel::insert_into(site_settings::table)
                .values(&row)
                .execute(&mut conn)?;
        }

        Ok(())
    }
}
