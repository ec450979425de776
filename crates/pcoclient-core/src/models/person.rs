use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Resource;

pub type Person = Resource<PersonAttributes>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersonAttributes {
    pub avatar: Option<String>,
    pub demographic_avatar_url: Option<String>,
    pub first_name: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub remote_id: Option<i64>,
    pub accounting_administrator: Option<bool>,
    pub anniversary: Option<NaiveDate>,
    pub birthdate: Option<NaiveDate>,
    pub child: Option<bool>,
    pub given_name: Option<String>,
    pub grade: Option<i32>,
    pub graduation_year: Option<i32>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub nickname: Option<String>,
    pub people_permissions: Option<String>,
    pub site_administrator: Option<bool>,
    pub gender: Option<String>,
    pub inactivated_at: Option<DateTime<Utc>>,
    pub medical_notes: Option<String>,
    pub membership: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub can_create_forms: Option<bool>,
    pub can_email_lists: Option<bool>,
    pub directory_shared_info: Option<Value>,
    pub directory_status: Option<String>,
    pub passed_background_check: Option<bool>,
    pub resource_permission_flags: Option<Value>,
    pub school_type: Option<String>,
    pub mfa_configured: Option<bool>,
}

/// Attributes accepted when creating a person. Unset fields are left out
/// of the request body entirely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateUserInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_administrator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anniversary: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people_permissions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_administrator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactivated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
