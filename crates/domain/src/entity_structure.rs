use serde::{Deserialize, Serialize};

use crate::AttrType;

/// Entity that an object-like attribute may reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityReferral {
    id: i64,
    name: String,
}

impl EntityReferral {
    /// Creates a referral value.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the referenced entity id.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the referenced entity name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Attribute projection used for schema validation.
///
/// Object-like attributes are expected to carry referrals, but the structure
/// itself does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityAttrStructure {
    id: i64,
    name: String,
    #[serde(rename = "type")]
    attr_type: AttrType,
    is_mandatory: bool,
    referral: Vec<EntityReferral>,
}

impl EntityAttrStructure {
    /// Creates an attribute projection.
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        attr_type: AttrType,
        is_mandatory: bool,
        referral: Vec<EntityReferral>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            attr_type,
            is_mandatory,
            referral,
        }
    }

    /// Returns the attribute id.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the attribute type code.
    #[must_use]
    pub fn attr_type(&self) -> AttrType {
        self.attr_type
    }

    /// Returns whether a value is mandatory.
    #[must_use]
    pub fn is_mandatory(&self) -> bool {
        self.is_mandatory
    }

    /// Returns the referable entities. Empty for non-object attributes.
    #[must_use]
    pub fn referral(&self) -> &[EntityReferral] {
        &self.referral
    }

    /// Returns whether any referral points at the entity named `entity_name`.
    #[must_use]
    pub fn refers_to(&self, entity_name: &str) -> bool {
        self.referral
            .iter()
            .any(|referral| referral.name() == entity_name)
    }
}

/// Minimal entity projection consumed by plugin schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityStructure {
    id: i64,
    name: String,
    attrs: Vec<EntityAttrStructure>,
}

impl EntityStructure {
    /// Creates an entity projection.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, attrs: Vec<EntityAttrStructure>) -> Self {
        Self {
            id,
            name: name.into(),
            attrs,
        }
    }

    /// Returns the entity id.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the entity name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns attributes in declaration order.
    #[must_use]
    pub fn attrs(&self) -> &[EntityAttrStructure] {
        &self.attrs
    }
}
