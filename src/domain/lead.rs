use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::listing::{Searchable, WeightedField};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub source: LeadSource,
    pub status: LeadStatus,
    pub message: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

/// Where a lead came from. Serialized as its display string so templates
/// and the JSON API see `"Lead Magnet"` rather than an enum map.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LeadSource {
    LeadMagnet,
    Chatbot,
    WebsiteForm,
    Referral,
    ContactForm,
    BookDemo,
    Newsletter,
    Other(String),
}

impl Serialize for LeadSource {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for LeadSource {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.into())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub source: LeadSource,
    pub message: Option<String>,
}

impl NewLead {
    #[must_use]
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        company: Option<String>,
        source: LeadSource,
        message: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.to_lowercase().trim().to_string(),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            company: company
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            source,
            message: message
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

impl Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadStatus::New => write!(f, "New"),
            LeadStatus::Contacted => write!(f, "Contacted"),
            LeadStatus::Qualified => write!(f, "Qualified"),
            LeadStatus::Converted => write!(f, "Converted"),
            LeadStatus::Lost => write!(f, "Lost"),
        }
    }
}

impl From<&str> for LeadStatus {
    fn from(s: &str) -> Self {
        match s {
            "Contacted" => LeadStatus::Contacted,
            "Qualified" => LeadStatus::Qualified,
            "Converted" => LeadStatus::Converted,
            "Lost" => LeadStatus::Lost,
            _ => LeadStatus::New,
        }
    }
}

impl From<String> for LeadStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl LeadStatus {
    /// Every status, in the order the admin filter dropdown lists them.
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Converted,
        LeadStatus::Lost,
    ];
}

impl Display for LeadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadSource::LeadMagnet => write!(f, "Lead Magnet"),
            LeadSource::Chatbot => write!(f, "Chatbot"),
            LeadSource::WebsiteForm => write!(f, "Website Form"),
            LeadSource::Referral => write!(f, "Referral"),
            LeadSource::ContactForm => write!(f, "Contact Form"),
            LeadSource::BookDemo => write!(f, "Book Demo"),
            LeadSource::Newsletter => write!(f, "Newsletter"),
            LeadSource::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for LeadSource {
    fn from(s: &str) -> Self {
        match s {
            "Lead Magnet" => LeadSource::LeadMagnet,
            "Chatbot" => LeadSource::Chatbot,
            "Website Form" => LeadSource::WebsiteForm,
            "Referral" => LeadSource::Referral,
            "Contact Form" => LeadSource::ContactForm,
            "Book Demo" => LeadSource::BookDemo,
            "Newsletter" => LeadSource::Newsletter,
            _ => LeadSource::Other(s.to_string()),
        }
    }
}

impl From<String> for LeadSource {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl Searchable for Lead {
    fn fields(&self) -> Vec<WeightedField<'_>> {
        let mut fields = vec![
            WeightedField::new(2.0, &self.name),
            WeightedField::new(1.5, &self.email),
        ];
        if let Some(company) = &self.company {
            fields.push(WeightedField::new(1.0, company));
        }
        fields
    }

    fn categories(&self) -> Vec<&str> {
        match self.status {
            LeadStatus::New => vec!["New"],
            LeadStatus::Contacted => vec!["Contacted"],
            LeadStatus::Qualified => vec!["Qualified"],
            LeadStatus::Converted => vec!["Converted"],
            LeadStatus::Lost => vec!["Lost"],
        }
    }
}
