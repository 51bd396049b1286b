use std::collections::BTreeMap;

use airone_domain::{AttrType, EntityReferral, Issue, IssueCode, IssuePath, ValidationResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

pub(super) const ENTITY_NAME_REQUIRED: &str = "モデル名は必須です";
pub(super) const ATTR_NAME_REQUIRED: &str = "属性名は必須です";
pub(super) const REFERRAL_REQUIRED: &str = "モデルを1つ以上選択してください";
pub(super) const WEBHOOK_URL_REQUIRED: &str = "URLは必須です";
pub(super) const DUPLICATE_ATTR_NAME: &str = "属性名が重複しています";

/// Editable entity as submitted by the entity edit form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityForm {
    /// Entity name.
    #[serde(default)]
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub note: String,
    /// Whether the entity is listed on the top page.
    #[serde(default)]
    pub is_toplevel: bool,
    /// Webhook settings.
    #[serde(default)]
    pub webhooks: Vec<WebhookForm>,
    /// Attribute rows in display order.
    #[serde(default)]
    pub attrs: Vec<EntityFormAttr>,
}

/// Attribute row of an [`EntityForm`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityFormAttr {
    /// Existing attribute id; `None` for new rows.
    #[serde(default)]
    pub id: Option<i64>,
    /// Attribute name.
    #[serde(default)]
    pub name: String,
    /// Attribute type code.
    #[serde(rename = "type")]
    pub attr_type: AttrType,
    /// Whether entries must set a value.
    #[serde(default)]
    pub is_mandatory: bool,
    /// Whether referencing entries are deleted together.
    #[serde(default)]
    pub is_delete_in_chain: bool,
    /// Whether the attribute is shown in summaries.
    #[serde(default)]
    pub is_summarized: bool,
    /// Referable entities for object-like types.
    #[serde(default)]
    pub referral: Vec<EntityReferral>,
    /// Free-form description.
    #[serde(default)]
    pub note: String,
    /// Position of this attribute in generated entry names.
    #[serde(default)]
    pub name_order: String,
    /// Text placed before the value in generated entry names.
    #[serde(default)]
    pub name_prefix: String,
    /// Text placed after the value in generated entry names.
    #[serde(default)]
    pub name_postfix: String,
    /// Default value for new entries.
    #[serde(default)]
    pub default_value: Option<Value>,
}

/// Webhook row of an [`EntityForm`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookForm {
    /// Existing webhook id; `None` for new rows.
    #[serde(default)]
    pub id: Option<i64>,
    /// Destination URL.
    #[serde(default)]
    pub url: String,
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// Whether the webhook fires.
    #[serde(default)]
    pub is_enabled: bool,
    /// Extra HTTP headers.
    #[serde(default)]
    pub headers: Vec<WebhookHeader>,
}

/// HTTP header sent with a webhook call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookHeader {
    /// Header name.
    pub header_key: String,
    /// Header value.
    pub header_value: String,
}

/// Validates an entity edit form, including duplicate attribute names.
#[must_use]
pub fn validate_entity_form(form: &EntityForm) -> ValidationResult {
    let mut issues = Vec::new();

    if form.name.is_empty() {
        issues.push(Issue::new(
            IssueCode::TooSmall,
            IssuePath::root().key("name"),
            ENTITY_NAME_REQUIRED,
        ));
    }

    for (index, webhook) in form.webhooks.iter().enumerate() {
        if webhook.url.is_empty() {
            issues.push(Issue::new(
                IssueCode::TooSmall,
                IssuePath::root().key("webhooks").index(index).key("url"),
                WEBHOOK_URL_REQUIRED,
            ));
        }
    }

    for (index, attr) in form.attrs.iter().enumerate() {
        let attr_path = IssuePath::root().key("attrs").index(index);

        if attr.name.is_empty() {
            issues.push(Issue::new(
                IssueCode::TooSmall,
                attr_path.clone().key("name"),
                ATTR_NAME_REQUIRED,
            ));
        }

        if attr.attr_type.is_object_like() && attr.referral.is_empty() {
            issues.push(Issue::custom(attr_path.key("referral"), REFERRAL_REQUIRED));
        }
    }

    issues.extend(duplicate_attr_name_issues(&form.attrs));

    if !issues.is_empty() {
        debug!(
            entity = form.name.as_str(),
            issues = issues.len(),
            "entity form validation failed"
        );
    }

    ValidationResult::from_issues(issues)
}

/// Flags every row of every group of rows sharing a non-empty name.
///
/// Names compare exactly, so whitespace-only names still group.
fn duplicate_attr_name_issues(attrs: &[EntityFormAttr]) -> Vec<Issue> {
    let mut indices_by_name: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (index, attr) in attrs.iter().enumerate() {
        if attr.name.is_empty() {
            continue;
        }
        indices_by_name
            .entry(attr.name.as_str())
            .or_default()
            .push(index);
    }

    let mut duplicated: Vec<usize> = indices_by_name
        .into_values()
        .filter(|indices| indices.len() > 1)
        .flatten()
        .collect();
    duplicated.sort_unstable();

    duplicated
        .into_iter()
        .map(|index| {
            Issue::custom(
                IssuePath::root().key("attrs").index(index).key("name"),
                DUPLICATE_ATTR_NAME,
            )
        })
        .collect()
}
