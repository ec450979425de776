use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Resource;

pub type Group = Resource<GroupAttributes>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupAttributes {
    pub archived_at: Option<DateTime<Utc>>,
    pub contact_email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub events_visibility: Option<String>,
    pub header_image: Option<Value>,
    pub location_type_preference: Option<String>,
    pub memberships_count: Option<i64>,
    pub name: Option<String>,
    pub public_church_center_web_url: Option<String>,
    pub schedule: Option<String>,
    pub virtual_location_url: Option<String>,
    pub widget_status: Option<Value>,
}
