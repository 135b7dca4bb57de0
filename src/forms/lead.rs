use serde::Deserialize;
use validator::Validate;

use crate::domain::lead::{LeadSource, NewLead};

#[derive(Deserialize, Validate)]
/// Form data submitted from the contact page.
pub struct ContactForm {
    /// Visitor's full name.
    #[validate(length(min = 2, max = 50))]
    pub name: String,
    /// Visitor's email address.
    #[validate(email)]
    pub email: String,
    /// Optional company name.
    pub company: Option<String>,
    /// Message body shown to the sales team.
    #[validate(length(min = 1))]
    pub message: String,
}

impl From<&ContactForm> for NewLead {
    fn from(form: &ContactForm) -> Self {
        NewLead::new(
            form.name.clone(),
            form.email.clone(),
            None,
            form.company.clone(),
            LeadSource::ContactForm,
            Some(form.message.clone()),
        )
    }
}

#[derive(Deserialize, Validate)]
/// Form data submitted from the book-a-demo page.
pub struct DemoRequestForm {
    #[validate(length(min = 2, max = 50))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    /// Free-form phone number, at least a handful of digits.
    #[validate(length(min = 5))]
    pub phone: String,
    pub company: Option<String>,
}

impl From<&DemoRequestForm> for NewLead {
    fn from(form: &DemoRequestForm) -> Self {
        NewLead::new(
            form.name.clone(),
            form.email.clone(),
            Some(form.phone.clone()),
            form.company.clone(),
            LeadSource::BookDemo,
            None,
        )
    }
}

#[derive(Deserialize, Validate)]
/// Newsletter signup: the popup only collects an email address.
pub struct NewsletterForm {
    #[validate(email)]
    pub email: String,
}

impl From<&NewsletterForm> for NewLead {
    fn from(form: &NewsletterForm) -> Self {
        NewLead::new(
            form.email.clone(),
            form.email.clone(),
            None,
            None,
            LeadSource::Newsletter,
            None,
        )
    }
}
