//! Orchestration Core - Shared functionality for the orchestration CLI
//!
//! Talks to the resource type API of an orchestration service and renders
//! what comes back as tables, JSON or YAML.

pub mod client;
pub mod config;
pub mod format;
pub mod paths;

pub use client::{
    ClientError, FilterSet, HttpClient, ResourceTypeRecord, ResourceTypeSummary, ResourceTypes,
    TemplateType,
};
pub use config::ClientConfig;
pub use format::{OutputFormat, Table};
pub use paths::Paths;
