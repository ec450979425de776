use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Resource;

pub type Email = Resource<EmailAttributes>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmailAttributes {
    pub address: String,
    pub location: Option<String>,
    #[serde(default)]
    pub primary: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub blocked: bool,
}

impl Resource<EmailAttributes> {
    pub fn person_id(&self) -> Option<&str> {
        self.related_id("person")
    }
}

/// Attributes sent when adding an email address to a person
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEmail {
    pub address: String,
    pub location: String,
    pub primary: bool,
}

impl NewEmail {
    /// A primary home address, the only kind this client creates
    pub fn primary_home(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            location: "Home".to_string(),
            primary: true,
        }
    }
}

/// First email in the list flagged as primary
pub fn find_primary(emails: &[Email]) -> Option<&Email> {
    emails.iter().find(|email| email.attributes.primary)
}
