// jotform-client/src/params.rs
//
// Query and form parameter shapes the service expects. List endpoints take
// flat pagination fields plus a JSON-encoded `filter`; write endpoints take
// bracket-keyed urlencoded forms (`submission[3][first]`, `question[text]`).
use serde_json::Value;

/// Response body format requested from the service.
///
/// `Xml` appends `.xml` to every endpoint path and the response bytes are
/// returned untouched; `Json` responses arrive wrapped in an envelope that
/// the client unwraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Xml,
}

/// Pagination and filtering for list endpoints.
///
/// Unset fields are left out of the query string. `filter` is serialized to
/// JSON and sent as a single parameter, e.g.
/// `filter={"status:ne":"DELETED"}`.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub offset: Option<usize>,
    pub limit: Option<usize>,
    pub filter: Option<Value>,
    pub order_by: Option<String>,
}

impl ListOptions {
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(offset) = self.offset {
            query.push(("offset".into(), offset.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".into(), limit.to_string()));
        }
        if let Some(filter) = &self.filter {
            query.push(("filter".into(), filter.to_string()));
        }
        if let Some(order_by) = &self.order_by {
            query.push(("orderby".into(), order_by.clone()));
        }
        query
    }
}

/// Bounds for the account activity log.
///
/// `date` is a named range (`lastWeek`, `last3Months`, ...); `start_date`
/// and `end_date` are `MM/DD/YYYY` and take precedence over `date` on the
/// service side.
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    pub action: Option<String>,
    pub date: Option<String>,
    pub sort_by: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl HistoryQuery {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let fields = [
            ("action", &self.action),
            ("date", &self.date),
            ("sortBy", &self.sort_by),
            ("startDate", &self.start_date),
            ("endDate", &self.end_date),
        ];

        fields
            .into_iter()
            .filter_map(|(name, value)| value.as_ref().map(|v| (name.into(), v.clone())))
            .collect()
    }
}

pub(crate) fn owned_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Wrap answer data in `submission[...]` keys. A `_` in a key addresses a
/// sub-field (`3_first` -> `submission[3][first]`), except for keys listed
/// in `literal` which are passed through whole (`created_at`).
pub(crate) fn submission_form(data: &[(&str, &str)], literal: &[&str]) -> Vec<(String, String)> {
    data.iter()
        .map(|&(key, value)| {
            let wrapped = match key.split_once('_') {
                Some((qid, field)) if !literal.contains(&key) => {
                    format!("submission[{qid}][{field}]")
                }
                _ => format!("submission[{key}]"),
            };
            (wrapped, value.to_string())
        })
        .collect()
}

/// Wrap each property in a bracket key under `prefix`, e.g.
/// `question[type]` or `properties[title]`.
pub(crate) fn prefixed_form(prefix: &str, data: &[(&str, &str)]) -> Vec<(String, String)> {
    data.iter()
        .map(|&(key, value)| (format!("{prefix}[{key}]"), value.to_string()))
        .collect()
}

/// Flatten a full form definition into bracket keys.
///
/// The definition is a JSON object of sections: `properties` is one level
/// deep (`properties[title]`), every other section is keyed collections two
/// levels deep (`questions[1][text]`, `emails[0][type]`).
pub(crate) fn form_definition_form(definition: &serde_json::Map<String, Value>) -> Vec<(String, String)> {
    let mut form = Vec::new();

    for (section, value) in definition {
        let Some(entries) = value.as_object() else {
            continue;
        };

        if section == "properties" {
            for (key, prop) in entries {
                form.push((format!("{section}[{key}]"), value_string(prop)));
            }
        } else {
            for (entry_key, entry) in entries {
                let Some(fields) = entry.as_object() else {
                    continue;
                };
                for (field, field_value) in fields {
                    form.push((
                        format!("{section}[{entry_key}][{field}]"),
                        value_string(field_value),
                    ));
                }
            }
        }
    }

    form
}

/// PUT body for assigning forms to a folder: `{"forms": [...]}`.
pub(crate) fn folder_forms_body(form_ids: &[&str]) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(&serde_json::json!({ "forms": form_ids }))
}

fn value_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_options_skips_unset_fields() {
        let query = ListOptions::default().limit(20).to_query();
        assert_eq!(query, vec![("limit".to_string(), "20".to_string())]);
    }

    #[test]
    fn list_options_encodes_filter_as_json() {
        let query = ListOptions::default()
            .offset(40)
            .filter(json!({"status:ne": "DELETED"}))
            .order_by("created_at")
            .to_query();

        assert_eq!(
            query,
            vec![
                ("offset".to_string(), "40".to_string()),
                ("filter".to_string(), r#"{"status:ne":"DELETED"}"#.to_string()),
                ("orderby".to_string(), "created_at".to_string()),
            ]
        );
    }

    #[test]
    fn history_query_keeps_only_set_fields() {
        let query = HistoryQuery {
            action: Some("userCreation".into()),
            start_date: Some("01/01/2024".into()),
            ..Default::default()
        }
        .to_query();

        assert_eq!(
            query,
            vec![
                ("action".to_string(), "userCreation".to_string()),
                ("startDate".to_string(), "01/01/2024".to_string()),
            ]
        );
    }

    #[test]
    fn submission_keys_split_on_underscore() {
        let form = submission_form(&[("1_first", "Ada"), ("2", "ada@example.com")], &[]);

        assert_eq!(
            form,
            vec![
                ("submission[1][first]".to_string(), "Ada".to_string()),
                ("submission[2]".to_string(), "ada@example.com".to_string()),
            ]
        );
    }

    #[test]
    fn submission_literal_keys_stay_whole() {
        let form = submission_form(&[("created_at", "2024-01-01")], &["created_at"]);

        assert_eq!(
            form,
            vec![("submission[created_at]".to_string(), "2024-01-01".to_string())]
        );
    }

    #[test]
    fn prefixed_form_wraps_keys() {
        let form = prefixed_form("question", &[("type", "control_textbox")]);
        assert_eq!(
            form,
            vec![("question[type]".to_string(), "control_textbox".to_string())]
        );
    }

    #[test]
    fn form_definition_flattens_nested_sections() {
        let definition = json!({
            "properties": {"title": "Contact"},
            "questions": {
                "1": {"type": "control_head", "text": "Contact us", "order": 1}
            }
        });

        let mut form = form_definition_form(definition.as_object().unwrap());
        form.sort();

        assert_eq!(
            form,
            vec![
                ("properties[title]".to_string(), "Contact".to_string()),
                ("questions[1][order]".to_string(), "1".to_string()),
                ("questions[1][text]".to_string(), "Contact us".to_string()),
                ("questions[1][type]".to_string(), "control_head".to_string()),
            ]
        );
    }

    #[test]
    fn folder_forms_body_shape() {
        let body = folder_forms_body(&["91234", "91235"]).unwrap();
        assert_eq!(body, br#"{"forms":["91234","91235"]}"#);
    }
}
