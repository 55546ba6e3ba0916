//! `--filter KEY=VALUE` parsing

use crate::error::CommandError;
use orchestration_core::FilterSet;

/// Build a filter set from `key=value` tokens.
///
/// Each token splits on its first `=`, so values may contain `=`. A later
/// token overrides an earlier one with the same key. A single token may
/// also carry several pairs joined by `;` (`name=A;version=1`).
pub fn parse_filters<S: AsRef<str>>(tokens: &[S]) -> Result<FilterSet, CommandError> {
    let pairs: Vec<&str> = match tokens {
        [only] if only.as_ref().contains(';') => only.as_ref().split(';').collect(),
        _ => tokens.iter().map(|token| token.as_ref()).collect(),
    };

    let mut filters = FilterSet::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .filter(|(key, _)| !key.is_empty())
            .ok_or_else(|| CommandError::MalformedFilter(pair.to_string()))?;
        filters.insert(key.to_string(), value.to_string());
    }
    Ok(filters)
}
