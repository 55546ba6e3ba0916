//! `resource show`

use crate::error::CommandError;
use orchestration_core::{ClientError, ResourceTypeRecord, ResourceTypes, Table, TemplateType};
use tracing::debug;

/// Show one resource type, or a template skeleton for it when
/// `template_type` is given.
///
/// `template_type` must be exactly `hot` or `cfn`; anything else fails
/// before the client is called. A not-found answer from the service becomes
/// `CommandError::NotFound`, every other client error passes through as is.
pub fn show_resource_type(
    client: &dyn ResourceTypes,
    resource_type: &str,
    template_type: Option<&str>,
) -> Result<Table, CommandError> {
    debug!(resource_type, ?template_type, "show resource type");

    let template_type = parse_template_type(template_type)?;

    let fetched = match template_type {
        Some(template_type) => client.generate_template(resource_type, template_type),
        None => client.get(resource_type),
    };

    match fetched {
        Ok(record) => Ok(record_table(record)),
        Err(ClientError::NotFound(_)) => Err(CommandError::NotFound(resource_type.to_string())),
        Err(err) => Err(err.into()),
    }
}

/// Parse an optional `--template-type` value; only `hot` and `cfn` pass
pub fn parse_template_type(raw: Option<&str>) -> Result<Option<TemplateType>, CommandError> {
    raw.map(|t| t.parse::<TemplateType>().map_err(CommandError::InvalidTemplateType))
        .transpose()
}

/// Keys become columns, values the single row, pairwise
fn record_table(record: ResourceTypeRecord) -> Table {
    let (columns, row): (Vec<String>, Vec<_>) = record.into_iter().unzip();
    Table::new(columns, vec![row])
}
