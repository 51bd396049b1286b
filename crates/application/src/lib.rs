//! Attribute-schema validation services for Airone entities.

#![forbid(unsafe_code)]

pub mod form_schema;
pub mod plugin_schema;

pub use form_schema::{
    AclForm, AclRoleForm, EntityForm, EntityFormAttr, EntryForm, EntryFormAttr, WebhookForm,
    WebhookHeader, validate_acl_form, validate_entity_form, validate_entry_form,
};
pub use plugin_schema::{
    AcceptedTypes, AttrRequirement, EntitySchema, RequireAttrOptions, RequireReferralOptions,
    ValidationErrorDetail, ValidationErrorReport, create_entity_schema,
    create_validation_error_report, format_validation_errors, missing_attr_message,
    missing_referral_message, require_attr, require_referral, to_entity_structure,
    validate_entity_structure, validate_raw_entity_structure,
};
