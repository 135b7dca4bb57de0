use diesel::prelude::*;

use crate::domain::settings::SiteSettings as DomainSettings;

#[derive(Debug, Clone, Queryable, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::site_settings)]
/// Diesel model for [`crate::domain::settings::SiteSettings`]. The table
/// holds a single row with `id = 1`.
pub struct SiteSettings {
    pub id: i32,
    pub company_name: String,
    pub contact_email: String,
    pub website_url: String,
    pub chatbot_name: String,
    pub welcome_message: String,
    pub email_notifications: bool,
    pub slack_notifications: bool,
    pub auto_responder: bool,
}

pub const SETTINGS_ROW_ID: i32 = 1;

impl From<SiteSettings> for DomainSettings {
    fn from(settings: SiteSettings) -> Self {
        Self {
            company_name: settings.company_name,
            contact_email: settings.contact_email,
            website_url: settings.website_url,
            chatbot_name: settings.chatbot_name,
            welcome_message: settings.welcome_message,
            email_notifications: settings.email_notifications,
            slack_notifications: settings.slack_notifications,
            auto_responder: settings.auto_responder,
        }
    }
}

impl From<&DomainSettings> for SiteSettings {
    fn from(settings: &DomainSettings) -> Self {
        Self {
            id: SETTINGS_ROW_ID,
            company_name: settings.company_name.clone(),
            contact_email: settings.contact_email.clone(),
            website_url: settings.website_url.clone(),
            chatbot_name: settings.chatbot_name.clone(),
            welcome_message: settings.welcome_message.clone(),
            email_notifications: settings.email_notifications,
            slack_notifications: settings.slack_notifications,
            auto_responder: settings.auto_responder,
        }
    }
}
