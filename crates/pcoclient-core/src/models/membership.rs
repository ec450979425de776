use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Resource;

/// Role value that marks a group leader
pub const LEADER_ROLE: &str = "leader";

pub type Membership = Resource<MembershipAttributes>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MembershipAttributes {
    pub joined_at: Option<DateTime<Utc>>,
    pub role: Option<String>,
}

impl Resource<MembershipAttributes> {
    pub fn is_leader(&self) -> bool {
        self.attributes.role.as_deref() == Some(LEADER_ROLE)
    }

    pub fn person_id(&self) -> Option<&str> {
        self.related_id("person")
    }

    pub fn group_id(&self) -> Option<&str> {
        self.related_id("group")
    }
}
