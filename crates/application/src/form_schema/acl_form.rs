use airone_domain::{AclType, Issue, IssuePath, ValidationResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub(super) const FULL_PERMISSION_REQUIRED: &str =
    "公開設定がオフの場合、少なくとも1つのロールにフル権限を付与する必要があります";

/// ACL settings as submitted by the ACL edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AclForm {
    /// Whether the object is visible to everyone.
    pub is_public: bool,
    /// Permission for roles without an explicit grant.
    pub default_permission: AclType,
    /// Per-role grants.
    #[serde(default)]
    pub roles: Vec<AclRoleForm>,
}

/// Per-role grant inside an [`AclForm`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AclRoleForm {
    /// Role id.
    pub id: i64,
    /// Role name.
    #[serde(default)]
    pub name: String,
    /// Permission granted to the role.
    pub current_permission: AclType,
}

/// Requires someone to keep full permission on a non-public object.
#[must_use]
pub fn validate_acl_form(form: &AclForm) -> ValidationResult {
    let has_full_grantee = form.default_permission == AclType::Full
        || form
            .roles
            .iter()
            .any(|role| role.current_permission == AclType::Full);

    if form.is_public || has_full_grantee {
        return ValidationResult::ok();
    }

    debug!(
        roles = form.roles.len(),
        "acl form leaves private object without full permission"
    );

    ValidationResult::from_issues(vec![Issue::custom(
        IssuePath::root().key("generalError"),
        FULL_PERMISSION_REQUIRED,
    )])
}
