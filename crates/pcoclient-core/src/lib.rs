//! Client library for the Planning Center REST API.
//!
//! Covers people, groups, group memberships, and email records:
//!
//! ```no_run
//! # async fn run() -> pcoclient_core::api::Result<()> {
//! use pcoclient_core::PlanningCenterClient;
//!
//! let client = PlanningCenterClient::from_env()?;
//! let leaders = client.get_group_leader_emails(42).await?;
//! println!("{:?}", leaders.data);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod models;

pub use api::{ApiError, PlanningCenterClient, QueryValue};
pub use config::Config;
