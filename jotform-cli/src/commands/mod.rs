// jotform-cli/src/commands/mod.rs
pub mod folders;
pub mod forms;
pub mod reports;
pub mod setup;
pub mod submissions;
pub mod user;

pub use folders::{handle_folders, FoldersCommands};
pub use forms::{handle_forms, FormsCommands};
pub use reports::{handle_reports, ReportsCommands};
pub use setup::run_setup;
pub use submissions::{handle_submissions, SubmissionsCommands};
pub use user::{handle_user, UserCommands};

use anyhow::{anyhow, Result};
use jotform_client::ListOptions;

/// Parse a `key=value` command-line pair.
pub fn parse_key_val(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{s}'"))
}

/// Assemble list options from the common list flags. `filter` must be a
/// JSON object, e.g. '{"status:ne":"DELETED"}'.
pub fn list_options(
    offset: Option<usize>,
    limit: Option<usize>,
    filter: Option<&str>,
    order_by: Option<String>,
) -> Result<ListOptions> {
    let filter = filter
        .map(|f| {
            serde_json::from_str(f).map_err(|e| anyhow!("--filter must be valid JSON: {e}"))
        })
        .transpose()?;

    Ok(ListOptions {
        offset,
        limit,
        filter,
        order_by,
    })
}

pub(crate) fn as_pairs(pairs: &[(String, String)]) -> Vec<(&str, &str)> {
    pairs
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_val_splits_on_first_equals() {
        assert_eq!(
            parse_key_val("1_first=Ada=Lovelace"),
            Ok(("1_first".to_string(), "Ada=Lovelace".to_string()))
        );
        assert!(parse_key_val("no-equals").is_err());
    }

    #[test]
    fn list_options_rejects_malformed_filter() {
        assert!(list_options(None, None, Some("{not json"), None).is_err());
        let options = list_options(None, Some(5), Some(r#"{"status":"ENABLED"}"#), None).unwrap();
        assert_eq!(options.limit, Some(5));
        assert!(options.filter.is_some());
    }
}
