use serde::{Deserialize, Serialize};

/// Site-wide settings edited on the admin settings page. Stored as a single
/// row; defaults seed the row on first read.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SiteSettings {
    pub company_name: String,
    pub contact_email: String,
    pub website_url: String,
    pub chatbot_name: String,
    pub welcome_message: String,
    pub email_notifications: bool,
    pub slack_notifications: bool,
    pub auto_responder: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            company_name: "ChatAI".to_string(),
            contact_email: "admin@chatai.com".to_string(),
            website_url: "https://chatai.com".to_string(),
            chatbot_name: "ChatAI Assistant".to_string(),
            welcome_message: "Hello! How can I assist you today?".to_string(),
            email_notifications: true,
            slack_notifications: false,
            auto_responder: true,
        }
    }
}
