//! Data models for Planning Center resources.
//!
//! Every resource arrives wrapped in the same envelope
//! (`{type, id, attributes, relationships}`) inside a top-level document
//! (`{data, included, meta, links}`). This module contains:
//!
//! - `Document`, `Resource`, `Relationship`: the envelope types
//! - `Person`, `CreateUserInput`: people records
//! - `Group`, `Membership`: groups and their members
//! - `Email`: email address records for a person

pub mod document;
pub mod email;
pub mod group;
pub mod membership;
pub mod person;

pub use document::{Document, Relationship, RelationshipData, Resource, ResourceIdentifier};
pub use email::{Email, EmailAttributes, NewEmail};
pub use group::{Group, GroupAttributes};
pub use membership::{Membership, MembershipAttributes, LEADER_ROLE};
pub use person::{CreateUserInput, Person, PersonAttributes};
