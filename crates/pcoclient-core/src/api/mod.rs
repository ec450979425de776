//! REST API client module for Planning Center.
//!
//! This module provides the `PlanningCenterClient` for communicating with
//! the Planning Center People and Groups APIs.
//!
//! Requests authenticate with HTTP Basic auth built from an application id
//! and secret (a personal access token pair).

pub mod client;
pub mod error;

pub use client::{PlanningCenterClient, QueryValue};
pub use error::{ApiError, Result};
