use std::collections::BTreeMap;

use airone_domain::{AttrType, Issue, IssueCode, IssuePath, ValidationResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

pub(super) const ENTRY_NAME_REQUIRED: &str = "アイテム名は必須です";
pub(super) const MANDATORY_VALUE_MISSING: &str = "必須項目です";

/// Editable entry as submitted by the entry edit form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryForm {
    /// Entry name.
    #[serde(default)]
    pub name: String,
    /// Attribute values keyed by attribute name.
    #[serde(default)]
    pub attrs: BTreeMap<String, EntryFormAttr>,
}

/// One attribute value of an [`EntryForm`].
///
/// `value` is shaped by `type`: a string for string-like types, a number,
/// a boolean, an object reference (`{id, name}` or null), `{name, object}`
/// for named types, and a list of those for array types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryFormAttr {
    /// Attribute type code.
    #[serde(rename = "type")]
    pub attr_type: AttrType,
    /// Whether a value must be set.
    #[serde(default)]
    pub is_mandatory: bool,
    /// Submitted value.
    #[serde(default)]
    pub value: Value,
}

/// Validates an entry edit form: the name and every mandatory value.
#[must_use]
pub fn validate_entry_form(form: &EntryForm) -> ValidationResult {
    let mut issues = Vec::new();

    if form.name.trim().is_empty() {
        issues.push(Issue::new(
            IssueCode::TooSmall,
            IssuePath::root().key("name"),
            ENTRY_NAME_REQUIRED,
        ));
    }

    for (attr_name, attr) in &form.attrs {
        if attr.is_mandatory && is_empty_value(attr.attr_type, &attr.value) {
            issues.push(Issue::custom(
                IssuePath::root()
                    .key("attrs")
                    .key(attr_name.as_str())
                    .key("value"),
                MANDATORY_VALUE_MISSING,
            ));
        }
    }

    if !issues.is_empty() {
        debug!(
            entry = form.name.as_str(),
            issues = issues.len(),
            "entry form validation failed"
        );
    }

    ValidationResult::from_issues(issues)
}

/// Returns whether `value` counts as unset for an attribute of `attr_type`.
pub(super) fn is_empty_value(attr_type: AttrType, value: &Value) -> bool {
    if attr_type.is_array() {
        let element_type = attr_type.element_type();
        return value.as_array().is_none_or(|items| {
            items
                .iter()
                .all(|item| is_empty_value(element_type, item))
        });
    }

    if attr_type.is_named() {
        let name_is_blank = value
            .get("name")
            .and_then(Value::as_str)
            .is_none_or(|name| name.trim().is_empty());
        let object_is_unset = value.get("object").is_none_or(Value::is_null);
        return name_is_blank && object_is_unset;
    }

    match attr_type.base() {
        AttrType::BOOLEAN => false,
        AttrType::STRING | AttrType::TEXT | AttrType::DATE | AttrType::DATETIME => value
            .as_str()
            .is_none_or(|text| text.trim().is_empty()),
        _ => value.is_null(),
    }
}
