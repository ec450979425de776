//! API client for communicating with the Planning Center REST API.
//!
//! This module provides the `PlanningCenterClient` struct for making
//! authenticated requests against the People and Groups products.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use futures::future::try_join_all;
use reqwest::header::{self, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::models::email::find_primary;
use crate::models::{CreateUserInput, Document, Email, Group, Membership, NewEmail, Person};

use super::error::{ApiError, Result};

/// Search filter used to look a person up by email, name, or phone number
const PERSON_SEARCH_PARAM: &str = "where[search_name_or_email_or_phone_number]";

/// A query parameter value. Rendered through its string form when
/// appended to a URL.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(s) => write!(f, "{}", s),
            QueryValue::Int(n) => write!(f, "{}", n),
            QueryValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(value.into())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

/// API client for Planning Center.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling,
/// and the authorization header is built once and shared by every clone.
#[derive(Clone)]
pub struct PlanningCenterClient {
    client: Client,
    base_url: String,
    auth_header: HeaderValue,
}

impl PlanningCenterClient {
    /// Create a new client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            auth_header: Self::basic_auth_header(&config.app_id, &config.app_secret)?,
        })
    }

    /// Create a client from `PCO_APP_ID` / `PCO_APP_SECRET` in the environment
    pub fn from_env() -> Result<Self> {
        Self::new(&Config::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn basic_auth_header(app_id: &str, app_secret: &str) -> Result<HeaderValue> {
        let encoded = STANDARD.encode(format!("{}:{}", app_id, app_secret));
        let mut value = HeaderValue::from_str(&format!("Basic {}", encoded))?;
        value.set_sensitive(true);
        Ok(value)
    }

    fn build_url(&self, path: &str, query: &[(&str, QueryValue)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, &value.to_string());
            }
        }
        Ok(url)
    }

    /// Send a request and buffer the body of a successful response.
    /// Non-success statuses fail without looking at the body as JSON.
    async fn execute(&self, request: RequestBuilder, method: &str, url: &Url) -> Result<Vec<u8>> {
        debug!(method = method, url = %url, "Sending request");

        let response = request
            .header(header::AUTHORIZATION, self.auth_header.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(method = method, url = %url, status = status.as_u16(), "Request failed");
            return Err(ApiError::from_status(status, &body));
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// GET `path` with query parameters appended in order
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, QueryValue)],
    ) -> Result<T> {
        let url = self.build_url(path, query)?;
        let body = self.execute(self.client.get(url.clone()), "GET", &url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// POST a JSON body to `path`
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path, &[])?;
        let request = self.client.post(url.clone()).json(body);
        let body = self.execute(request, "POST", &url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// DELETE `path`. An empty success body (204 No Content) yields `None`.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = self.build_url(path, &[])?;
        let body = self.execute(self.client.delete(url.clone()), "DELETE", &url).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&body)?))
    }

    // ===== Resource Methods =====

    pub async fn get_group_by_id(&self, group_id: impl fmt::Display) -> Result<Document<Group>> {
        self.get(&format!("groups/v2/groups/{}", group_id), &[]).await
    }

    /// Same request as `get_group_by_id`
    pub async fn get_group(&self, group_id: impl fmt::Display) -> Result<Document<Group>> {
        self.get_group_by_id(group_id).await
    }

    /// Search people by email (the filter also matches names and phone
    /// numbers). Email records come back in `included`.
    pub async fn get_person_by_email(&self, email: &str) -> Result<Document<Vec<Person>>> {
        self.get(
            "people/v2/people",
            &[("include", "emails".into()), (PERSON_SEARCH_PARAM, email.into())],
        )
        .await
    }

    pub async fn get_person_by_id(&self, id: impl fmt::Display) -> Result<Document<Person>> {
        self.get(&format!("people/v2/people/{}", id), &[]).await
    }

    pub async fn get_persons_emails(&self, id: impl fmt::Display) -> Result<Document<Vec<Email>>> {
        self.get(&format!("people/v2/people/{}/emails", id), &[]).await
    }

    pub async fn get_group_members(
        &self,
        group_id: impl fmt::Display,
    ) -> Result<Document<Vec<Membership>>> {
        self.get(&format!("groups/v2/groups/{}/memberships", group_id), &[])
            .await
    }

    /// Ask to join a group of the "unique" group type
    pub async fn request_group_enrollment(&self, group_id: impl fmt::Display) -> Result<Value> {
        self.post(
            &format!("groups/v2/group_types/unique/groups/{}/enroll", group_id),
            &json!({}),
        )
        .await
    }

    pub async fn create_user(&self, info: &CreateUserInput) -> Result<Document<Person>> {
        let body = json!({
            "data": {
                "type": "Person",
                "attributes": info,
            }
        });
        self.post("people/v2/people", &body).await
    }

    /// Add a primary home email address to a person.
    /// Only the leading integer of `id` is used, so `"12abc"` targets person 12.
    /// The digits are kept as text, so ids wider than `i64` still pass through.
    pub async fn update_user_email(&self, id: &str, email: &str) -> Result<Document<Email>> {
        let person_id = parse_int_prefix(id).ok_or_else(|| ApiError::InvalidId(id.to_string()))?;
        let body = json!({
            "data": {
                "type": "Email",
                "attributes": NewEmail::primary_home(email),
            }
        });
        self.post(&format!("people/v2/people/{}/emails", person_id), &body)
            .await
    }

    /// Primary email addresses of every leader in a group.
    ///
    /// Emails are fetched concurrently, one request per leader, with no
    /// limit. Leaders without a primary email are left out. Results follow
    /// the membership order. Any failed lookup fails the whole call.
    pub async fn get_group_leader_emails(
        &self,
        group_id: impl fmt::Display,
    ) -> Result<Document<Vec<String>>> {
        let members = self.get_group_members(group_id).await?;

        let leader_ids: Vec<&str> = members
            .data
            .iter()
            .filter(|m| m.is_leader())
            .filter_map(|m| {
                let person_id = m.person_id();
                if person_id.is_none() {
                    warn!(membership = %m.id, "Leader membership has no linked person");
                }
                person_id
            })
            .collect();

        if leader_ids.is_empty() {
            return Ok(Document::new(Vec::new()));
        }

        debug!(count = leader_ids.len(), "Fetching leader emails");
        let lookups = leader_ids.iter().map(|id| self.primary_email(id));
        let addresses = try_join_all(lookups).await?;

        Ok(Document::new(addresses.into_iter().flatten().collect()))
    }

    async fn primary_email(&self, person_id: &str) -> Result<Option<String>> {
        let emails = self
            .get_persons_emails(person_id)
            .await
            .map_err(|e| ApiError::LeaderEmails {
                person_id: person_id.to_string(),
                source: Box::new(e),
            })?;

        Ok(find_primary(&emails.data)
            .map(|email| &email.attributes.address)
            .filter(|address| !address.is_empty())
            .cloned())
    }
}

/// Leading integer of a string: optional whitespace and sign, then digits.
/// Anything after the digits is ignored. Leading zeros and the sign of zero
/// are dropped; the digits are never narrowed to a fixed-width integer.
fn parse_int_prefix(s: &str) -> Option<String> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let digits = rest[..digits_len].trim_start_matches('0');
    Some(match (negative, digits.is_empty()) {
        (_, true) => "0".to_string(),
        (true, false) => format!("-{}", digits),
        (false, false) => digits.to_string(),
    })
}
