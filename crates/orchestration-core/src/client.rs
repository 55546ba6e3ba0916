//! Resource type client for the orchestration service
//!
//! `ResourceTypes` is the seam the commands are written against. `HttpClient`
//! implements it over the service's REST API:
//!
//! - `GET {endpoint}/resource_types?{filters}`
//! - `GET {endpoint}/resource_types/{name}`
//! - `GET {endpoint}/resource_types/{name}/template?template_type={hot|cfn}`

use crate::config::{ClientConfig, ENV_ENDPOINT};
use anyhow::{bail, Context};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = concat!("orchestration/", env!("CARGO_PKG_VERSION"));
const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Definition of a single resource type, as returned by the service
pub type ResourceTypeRecord = Map<String, Value>;

/// Filters applied to a resource type listing (name, version, support_status)
pub type FilterSet = BTreeMap<String, String>;

/// One entry of a resource type listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTypeSummary {
    pub resource_type: String,
}

impl ResourceTypeSummary {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
        }
    }
}

/// Dialect of a generated template skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateType {
    Hot,
    Cfn,
}

impl TemplateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Hot => "hot",
            TemplateType::Cfn => "cfn",
        }
    }
}

impl FromStr for TemplateType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hot" => Ok(TemplateType::Hot),
            "cfn" => Ok(TemplateType::Cfn),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors reported by the orchestration client
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("ERROR: {message} (HTTP {status})")]
    Http { status: u16, message: String },

    #[error("Unable to reach the orchestration service")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response from the orchestration service")]
    Decode(#[from] serde_json::Error),

    #[error("Endpoint {0} cannot carry resource paths")]
    Endpoint(String),

    #[error(
        "No orchestration endpoint configured: pass --os-orchestration-url or set {}",
        ENV_ENDPOINT
    )]
    NoEndpoint,
}

/// Resource type operations of the orchestration API
pub trait ResourceTypes {
    /// Fetch the definition of one resource type
    fn get(&self, resource_type: &str) -> Result<ResourceTypeRecord, ClientError>;

    /// Generate a template skeleton for one resource type
    fn generate_template(
        &self,
        resource_type: &str,
        template_type: TemplateType,
    ) -> Result<ResourceTypeRecord, ClientError>;

    /// List resource types matching `filters` (empty means all)
    fn list(&self, filters: &FilterSet) -> Result<Vec<ResourceTypeSummary>, ClientError>;
}

/// Blocking HTTP implementation of `ResourceTypes`
///
/// A missing endpoint is only reported when a request is attempted.
pub struct HttpClient {
    http: Client,
    endpoint: Option<Url>,
    token: Option<String>,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let endpoint = config
            .endpoint
            .as_deref()
            .map(parse_endpoint)
            .transpose()?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint,
            token: config.token.clone(),
        })
    }

    /// Endpoint URL with `segments` appended, each percent-encoded as one path segment
    fn resource_url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let base = self.endpoint.as_ref().ok_or(ClientError::NoEndpoint)?;
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Endpoint(base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let mut request = request.header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.header(AUTH_TOKEN_HEADER, token);
        }

        let response = request.send()?;
        let status = response.status();
        debug!(url = %response.url(), %status, "orchestration response");

        let body = response.text()?;
        if !status.is_success() {
            return Err(error_from_response(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

impl ResourceTypes for HttpClient {
    fn get(&self, resource_type: &str) -> Result<ResourceTypeRecord, ClientError> {
        let url = self.resource_url(&["resource_types", resource_type])?;
        debug!(%url, "GET resource type");
        self.send(self.http.get(url))
    }

    fn generate_template(
        &self,
        resource_type: &str,
        template_type: TemplateType,
    ) -> Result<ResourceTypeRecord, ClientError> {
        let url = self.resource_url(&["resource_types", resource_type, "template"])?;
        debug!(%url, %template_type, "GET resource type template");
        self.send(
            self.http
                .get(url)
                .query(&[("template_type", template_type.as_str())]),
        )
    }

    fn list(&self, filters: &FilterSet) -> Result<Vec<ResourceTypeSummary>, ClientError> {
        let url = self.resource_url(&["resource_types"])?;
        debug!(%url, ?filters, "GET resource types");
        let body: ListBody = self.send(self.http.get(url).query(filters))?;
        Ok(body.into_summaries())
    }
}

fn parse_endpoint(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid orchestration endpoint: {}", raw))?;
    if url.cannot_be_a_base() {
        bail!("Invalid orchestration endpoint: {}", raw);
    }
    Ok(url)
}

/// Listing body; older services return bare names, newer ones objects
#[derive(Debug, Deserialize)]
struct ListBody {
    resource_types: Vec<ListItem>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListItem {
    Name(String),
    Summary(ResourceTypeSummary),
}

impl ListBody {
    fn into_summaries(self) -> Vec<ResourceTypeSummary> {
        self.resource_types
            .into_iter()
            .map(|item| match item {
                ListItem::Name(name) => ResourceTypeSummary::new(name),
                ListItem::Summary(summary) => summary,
            })
            .collect()
    }
}

/// Map a non-success response onto a typed error
fn error_from_response(status: StatusCode, body: &str) -> ClientError {
    let message = error_message(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    });

    if status == StatusCode::NOT_FOUND {
        ClientError::NotFound(message)
    } else {
        ClientError::Http {
            status: status.as_u16(),
            message,
        }
    }
}

/// Pull the most specific message out of an error body
fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        let candidates = [
            value.pointer("/error/message"),
            value.get("explanation"),
            value.get("title"),
        ];
        for candidate in candidates.into_iter().flatten() {
            if let Some(s) = candidate.as_str().filter(|s| !s.is_empty()) {
                return Some(s.to_string());
            }
        }
    }

    Some(trimmed.to_string())
}
