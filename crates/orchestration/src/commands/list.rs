//! `resource list`

use crate::error::CommandError;
use crate::filter::parse_filters;
use orchestration_core::{ResourceTypes, Table};
use serde_json::Value;
use tracing::debug;

/// Header of the single listing column
pub const LIST_COLUMN: &str = "Resource Type";

/// List resource types matching `filters` (`key=value` tokens), sorted by name.
///
/// An empty filter set is still passed to the client.
pub fn list_resource_types<S: AsRef<str>>(
    client: &dyn ResourceTypes,
    filters: &[S],
) -> Result<Table, CommandError> {
    let filters = parse_filters(filters)?;
    debug!(?filters, "list resource types");

    let mut names: Vec<String> = client
        .list(&filters)?
        .into_iter()
        .map(|summary| summary.resource_type)
        .collect();
    names.sort();

    let rows = names.into_iter().map(|name| vec![Value::String(name)]).collect();
    Ok(Table::new(vec![LIST_COLUMN.to_string()], rows))
}
