//! Attribute-schema data model for Airone entities.

#![forbid(unsafe_code)]

mod acl;
mod attr_type;
mod entity_detail;
mod entity_structure;
mod validation;

pub use acl::AclType;
pub use attr_type::AttrType;
pub use entity_detail::{EntityDetail, EntityDetailAttr, EntityDetailReferral};
pub use entity_structure::{EntityAttrStructure, EntityReferral, EntityStructure};
pub use validation::{Issue, IssueCode, IssuePath, PathSegment, ValidationResult};
