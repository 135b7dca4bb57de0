use serde::Deserialize;
use validator::Validate;

use crate::domain::settings::SiteSettings;

#[derive(Deserialize, Validate)]
/// Admin settings form. Checkbox fields arrive only when checked.
pub struct SaveSettingsForm {
    #[validate(length(min = 1))]
    pub company_name: String,
    #[validate(email)]
    pub contact_email: String,
    #[validate(url)]
    pub website_url: String,
    #[validate(length(min = 1))]
    pub chatbot_name: String,
    #[validate(length(min = 1))]
    pub welcome_message: String,
    pub email_notifications: Option<String>,
    pub slack_notifications: Option<String>,
    pub auto_responder: Option<String>,
}

impl From<&SaveSettingsForm> for SiteSettings {
    fn from(form: &SaveSettingsForm) -> Self {
        Self {
            company_name: form.company_name.trim().to_string(),
            contact_email: form.contact_email.trim().to_lowercase(),
            website_url: form.website_url.trim().to_string(),
            chatbot_name: form.chatbot_name.trim().to_string(),
            welcome_message: form.welcome_message.trim().to_string(),
            email_notifications: form.email_notifications.is_some(),
            slack_notifications: form.slack_notifications.is_some(),
            auto_responder: form.auto_responder.is_some(),
        }
    }
}
