//! Plugin entity-schema validation.
//!
//! Plugins declare [`AttrRequirement`]s, compose them with
//! [`create_entity_schema`] and gate features on
//! [`validate_entity_structure`].

mod builder;
mod converter;
mod predicates;
mod requirement;
mod shape;
mod validator;

pub use builder::{
    EntitySchema, create_entity_schema, missing_attr_message, missing_referral_message,
};
pub use converter::to_entity_structure;
pub use predicates::{RequireAttrOptions, RequireReferralOptions, require_attr, require_referral};
pub use requirement::{AcceptedTypes, AttrRequirement};
pub use validator::{
    ValidationErrorDetail, ValidationErrorReport, create_validation_error_report,
    format_validation_errors, validate_entity_structure, validate_raw_entity_structure,
};
