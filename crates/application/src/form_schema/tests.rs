use std::collections::BTreeMap;

use airone_domain::{AclType, AttrType, EntityReferral, IssueCode};
use serde_json::{Value, json};

use super::acl_form::FULL_PERMISSION_REQUIRED;
use super::entity_form::{
    ATTR_NAME_REQUIRED, DUPLICATE_ATTR_NAME, ENTITY_NAME_REQUIRED, REFERRAL_REQUIRED,
    WEBHOOK_URL_REQUIRED,
};
use super::entry_form::{ENTRY_NAME_REQUIRED, MANDATORY_VALUE_MISSING, is_empty_value};
use super::{
    AclForm, AclRoleForm, EntityForm, EntityFormAttr, EntryForm, EntryFormAttr, WebhookForm,
    validate_acl_form, validate_entity_form, validate_entry_form,
};

fn attr(name: &str, attr_type: AttrType) -> EntityFormAttr {
    EntityFormAttr {
        id: None,
        name: name.to_owned(),
        attr_type,
        is_mandatory: false,
        is_delete_in_chain: false,
        is_summarized: false,
        referral: Vec::new(),
        note: String::new(),
        name_order: "0".to_owned(),
        name_prefix: String::new(),
        name_postfix: String::new(),
        default_value: None,
    }
}

fn entity_form(attr_names: &[&str]) -> EntityForm {
    EntityForm {
        name: "Server".to_owned(),
        attrs: attr_names
            .iter()
            .map(|name| attr(name, AttrType::STRING))
            .collect(),
        ..EntityForm::default()
    }
}

fn duplicate_indices(form: &EntityForm) -> Vec<String> {
    validate_entity_form(form)
        .errors()
        .iter()
        .filter(|issue| {
            issue.code() == IssueCode::Custom && issue.message() == DUPLICATE_ATTR_NAME
        })
        .map(|issue| issue.path().dotted())
        .collect()
}

#[test]
fn entity_form_with_unique_names_passes() {
    let result = validate_entity_form(&entity_form(&["hostname", "ip_address"]));

    assert!(result.is_success());
}

#[test]
fn duplicate_names_flag_every_row_of_the_group() {
    assert_eq!(
        duplicate_indices(&entity_form(&["attr1", "attr2", "attr1"])),
        vec!["attrs.0.name", "attrs.2.name"]
    );
    assert_eq!(
        duplicate_indices(&entity_form(&["attr1", "attr2", "attr1", "attr1"])),
        vec!["attrs.0.name", "attrs.2.name", "attrs.3.name"]
    );
}

#[test]
fn independent_duplicate_groups_are_each_reported() {
    assert_eq!(
        duplicate_indices(&entity_form(&["attr1", "attr2", "attr1", "attr3", "attr2"])),
        vec!["attrs.0.name", "attrs.1.name", "attrs.2.name", "attrs.4.name"]
    );
}

#[test]
fn empty_names_are_required_but_not_duplicates() {
    let result = validate_entity_form(&entity_form(&["", "hostname", ""]));

    let reported: Vec<(String, &str, IssueCode)> = result
        .errors()
        .iter()
        .map(|issue| (issue.path().dotted(), issue.message(), issue.code()))
        .collect();
    assert_eq!(
        reported,
        vec![
            ("attrs.0.name".to_owned(), ATTR_NAME_REQUIRED, IssueCode::TooSmall),
            ("attrs.2.name".to_owned(), ATTR_NAME_REQUIRED, IssueCode::TooSmall),
        ]
    );
}

#[test]
fn whitespace_only_names_are_present_and_can_duplicate() {
    let result = validate_entity_form(&entity_form(&[" ", "hostname", " "]));

    let reported: Vec<(String, &str, IssueCode)> = result
        .errors()
        .iter()
        .map(|issue| (issue.path().dotted(), issue.message(), issue.code()))
        .collect();
    assert_eq!(
        reported,
        vec![
            ("attrs.0.name".to_owned(), DUPLICATE_ATTR_NAME, IssueCode::Custom),
            ("attrs.2.name".to_owned(), DUPLICATE_ATTR_NAME, IssueCode::Custom),
        ]
    );
}

#[test]
fn object_like_attributes_require_referral() {
    let mut with_referral = attr("rack", AttrType::ARRAY_NAMED_OBJECT);
    with_referral.referral = vec![EntityReferral::new(3, "Rack")];
    let form = EntityForm {
        name: "Server".to_owned(),
        attrs: vec![
            attr("location", AttrType::OBJECT),
            with_referral,
            attr("tags", AttrType::ARRAY_STRING),
        ],
        ..EntityForm::default()
    };

    let result = validate_entity_form(&form);

    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].path().dotted(), "attrs.0.referral");
    assert_eq!(result.errors()[0].message(), REFERRAL_REQUIRED);
}

#[test]
fn entity_name_and_webhook_url_are_required() {
    let form = EntityForm {
        name: String::new(),
        webhooks: vec![WebhookForm {
            label: "notify".to_owned(),
            is_enabled: true,
            ..WebhookForm::default()
        }],
        ..EntityForm::default()
    };

    let result = validate_entity_form(&form);

    let messages: Vec<&str> = result.errors().iter().map(|issue| issue.message()).collect();
    assert_eq!(messages, vec![ENTITY_NAME_REQUIRED, WEBHOOK_URL_REQUIRED]);
}

#[test]
fn entity_form_reads_camel_case_payload() {
    let form: Result<EntityForm, _> = serde_json::from_value(json!({
        "name": "Server",
        "isToplevel": true,
        "attrs": [
            {
                "name": "rack",
                "type": 1,
                "isMandatory": true,
                "referral": [{ "id": 1, "name": "Rack" }],
            },
            { "name": "rack", "type": 2, "namePrefix": "[", "namePostfix": "]" },
        ],
    }));

    let form = form.unwrap_or_else(|_| unreachable!());
    assert!(form.is_toplevel);
    assert_eq!(duplicate_indices(&form), vec!["attrs.0.name", "attrs.1.name"]);
}

fn entry_attr(attr_type: AttrType, value: Value) -> EntryFormAttr {
    EntryFormAttr {
        attr_type,
        is_mandatory: true,
        value,
    }
}

#[test]
fn entry_form_requires_name_and_mandatory_values() {
    let form = EntryForm {
        name: String::new(),
        attrs: BTreeMap::from([
            ("hostname".to_owned(), entry_attr(AttrType::STRING, json!(""))),
            ("active".to_owned(), entry_attr(AttrType::BOOLEAN, json!(false))),
            (
                "rack".to_owned(),
                entry_attr(AttrType::OBJECT, json!({ "id": 1, "name": "r1" })),
            ),
        ]),
    };

    let result = validate_entry_form(&form);

    let reported: Vec<(String, &str)> = result
        .errors()
        .iter()
        .map(|issue| (issue.path().dotted(), issue.message()))
        .collect();
    assert_eq!(
        reported,
        vec![
            ("name".to_owned(), ENTRY_NAME_REQUIRED),
            ("attrs.hostname.value".to_owned(), MANDATORY_VALUE_MISSING),
        ]
    );
}

#[test]
fn optional_entry_values_may_be_empty() {
    let mut note = entry_attr(AttrType::TEXT, Value::Null);
    note.is_mandatory = false;
    let form = EntryForm {
        name: "server-01".to_owned(),
        attrs: BTreeMap::from([("note".to_owned(), note)]),
    };

    assert!(validate_entry_form(&form).is_success());
}

#[test]
fn emptiness_follows_attribute_type() {
    assert!(is_empty_value(AttrType::NUMBER, &Value::Null));
    assert!(!is_empty_value(AttrType::NUMBER, &json!(0)));
    assert!(!is_empty_value(AttrType::BOOLEAN, &Value::Null));
    assert!(is_empty_value(AttrType::GROUP, &Value::Null));
    assert!(is_empty_value(
        AttrType::NAMED_OBJECT,
        &json!({ "name": "", "object": null })
    ));
    assert!(!is_empty_value(
        AttrType::NAMED_OBJECT,
        &json!({ "name": "primary", "object": null })
    ));
    assert!(is_empty_value(AttrType::ARRAY_STRING, &json!(["", " "])));
    assert!(!is_empty_value(AttrType::ARRAY_STRING, &json!(["", "tag"])));
    assert!(is_empty_value(AttrType::ARRAY_ROLE, &json!([])));
    assert!(!is_empty_value(
        AttrType::ARRAY_NAMED_OBJECT,
        &json!([{ "name": "", "object": { "id": 1, "name": "x" } }])
    ));
}

fn role(id: i64, permission: AclType) -> AclRoleForm {
    AclRoleForm {
        id,
        name: format!("role-{id}"),
        current_permission: permission,
    }
}

#[test]
fn public_acl_needs_no_full_grantee() {
    let form = AclForm {
        is_public: true,
        default_permission: AclType::Nothing,
        roles: vec![role(1, AclType::Readable)],
    };

    assert!(validate_acl_form(&form).is_success());
}

#[test]
fn private_acl_accepts_full_default_or_full_role() {
    let full_default = AclForm {
        is_public: false,
        default_permission: AclType::Full,
        roles: Vec::new(),
    };
    let full_role = AclForm {
        is_public: false,
        default_permission: AclType::Nothing,
        roles: vec![role(1, AclType::Writable), role(2, AclType::Full)],
    };

    assert!(validate_acl_form(&full_default).is_success());
    assert!(validate_acl_form(&full_role).is_success());
}

#[test]
fn private_acl_without_full_grantee_reports_general_error() {
    let form: Result<AclForm, _> = serde_json::from_value(json!({
        "isPublic": false,
        "defaultPermission": 2,
        "roles": [{ "id": 1, "name": "operators", "currentPermission": 4 }],
    }));

    let result = validate_acl_form(&form.unwrap_or_else(|_| unreachable!()));

    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].path().dotted(), "generalError");
    assert_eq!(result.errors()[0].message(), FULL_PERMISSION_REQUIRED);
}
