use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::AttrType;

/// Entity detail payload as returned by the backend entity API.
///
/// Only `id`, `name` and `attrs` are required; everything else defaults when
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDetail {
    /// Entity id.
    pub id: i64,
    /// Entity name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub note: String,
    /// Whether the entity is listed on the top page.
    #[serde(default)]
    pub is_toplevel: bool,
    /// Whether a background job is still applying changes.
    #[serde(default)]
    pub has_ongoing_changes: bool,
    /// Attribute definitions.
    pub attrs: Vec<EntityDetailAttr>,
    /// Webhook settings, passed through untouched.
    #[serde(default)]
    pub webhooks: Vec<Value>,
}

/// Attribute definition inside an [`EntityDetail`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDetailAttr {
    /// Attribute id.
    pub id: i64,
    /// Display order.
    #[serde(default)]
    pub index: i64,
    /// Attribute name.
    pub name: String,
    /// Attribute type code.
    #[serde(rename = "type")]
    pub attr_type: AttrType,
    /// Whether a value is mandatory.
    #[serde(default)]
    pub is_mandatory: bool,
    /// Whether referencing entries are deleted together.
    #[serde(default)]
    pub is_delete_in_chain: bool,
    /// Whether the attribute is shown in summaries.
    #[serde(default)]
    pub is_summarized: bool,
    /// Whether the current user may write the attribute.
    #[serde(default)]
    pub is_writable: bool,
    /// Referable entities; `None` when the backend omits the field or sends null.
    #[serde(default)]
    pub referral: Option<Vec<EntityDetailReferral>>,
    /// Free-form description.
    #[serde(default)]
    pub note: String,
    /// Default value for new entries.
    #[serde(default)]
    pub default_value: Option<Value>,
}

/// Referral entry inside an [`EntityDetailAttr`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDetailReferral {
    /// Referenced entity id.
    pub id: i64,
    /// Referenced entity name.
    pub name: String,
    /// Whether the referenced entity is public, when the backend reports it.
    #[serde(default)]
    pub is_public: Option<bool>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::EntityDetail;
    use crate::AttrType;

    #[test]
    fn accepts_missing_and_null_referrals() {
        let detail: Result<EntityDetail, _> = serde_json::from_value(json!({
            "id": 1,
            "name": "Server",
            "note": "physical hosts",
            "isToplevel": true,
            "attrs": [
                { "id": 11, "name": "hostname", "type": 2, "isMandatory": true },
                { "id": 12, "name": "rack", "type": 1, "referral": null },
            ],
        }));

        let detail = detail.unwrap_or_else(|_| unreachable!());
        assert_eq!(detail.attrs.len(), 2);
        assert_eq!(detail.attrs[0].attr_type, AttrType::STRING);
        assert!(detail.attrs[0].referral.is_none());
        assert!(detail.attrs[1].referral.is_none());
        assert!(detail.webhooks.is_empty());
    }

    #[test]
    fn rejects_payload_without_attrs() {
        let detail: Result<EntityDetail, _> =
            serde_json::from_value(json!({ "id": 1, "name": "Server" }));
        assert!(detail.is_err());
    }
}
