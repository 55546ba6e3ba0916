//! orchestration - Resource type commands for the orchestration service
//!
//! Shows a single resource type (or a template skeleton generated from it)
//! and lists the resource types the service knows about. Each command turns
//! its arguments into exactly one client call and reshapes the answer into
//! a `Table` for the formatter.

pub mod commands;
pub mod error;
pub mod filter;

pub use commands::{list_resource_types, parse_template_type, show_resource_type};
pub use error::CommandError;
pub use filter::parse_filters;
