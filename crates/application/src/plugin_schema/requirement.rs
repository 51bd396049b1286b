use airone_domain::AttrType;
use serde::{Deserialize, Serialize};

/// Set of attribute type codes a requirement accepts.
///
/// Matching is by exact code: accepting `STRING` does not accept
/// `ARRAY_STRING`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AcceptedTypesRepr", into = "AcceptedTypesRepr")]
pub struct AcceptedTypes(Vec<AttrType>);

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum AcceptedTypesRepr {
    One(AttrType),
    Many(Vec<AttrType>),
}

impl AcceptedTypes {
    /// Returns whether `attr_type` equals one of the accepted codes.
    #[must_use]
    pub fn accepts(&self, attr_type: AttrType) -> bool {
        self.0.contains(&attr_type)
    }

    /// Returns the accepted codes in declaration order.
    #[must_use]
    pub fn as_slice(&self) -> &[AttrType] {
        &self.0
    }
}

impl From<AcceptedTypesRepr> for AcceptedTypes {
    fn from(value: AcceptedTypesRepr) -> Self {
        match value {
            AcceptedTypesRepr::One(attr_type) => Self(vec![attr_type]),
            AcceptedTypesRepr::Many(attr_types) => Self(attr_types),
        }
    }
}

impl From<AcceptedTypes> for AcceptedTypesRepr {
    fn from(mut value: AcceptedTypes) -> Self {
        match value.0.len() {
            1 => Self::One(value.0.remove(0)),
            _ => Self::Many(value.0),
        }
    }
}

impl From<AttrType> for AcceptedTypes {
    fn from(value: AttrType) -> Self {
        Self(vec![value])
    }
}

impl From<Vec<AttrType>> for AcceptedTypes {
    fn from(value: Vec<AttrType>) -> Self {
        Self(value)
    }
}

impl From<&[AttrType]> for AcceptedTypes {
    fn from(value: &[AttrType]) -> Self {
        Self(value.to_vec())
    }
}

impl<const N: usize> From<[AttrType; N]> for AcceptedTypes {
    fn from(value: [AttrType; N]) -> Self {
        Self(value.to_vec())
    }
}

/// One structural expectation a plugin places on an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrRequirement {
    name: String,
    accepted_types: AcceptedTypes,
    must_be_mandatory: bool,
    referrals: Vec<String>,
    message: Option<String>,
}

impl AttrRequirement {
    /// Requires an attribute named `name` whose type is one of `accepted_types`.
    ///
    /// Any name is accepted; an empty name only matches an attribute named `""`.
    #[must_use]
    pub fn new(name: impl Into<String>, accepted_types: impl Into<AcceptedTypes>) -> Self {
        Self {
            name: name.into(),
            accepted_types: accepted_types.into(),
            must_be_mandatory: false,
            referrals: Vec::new(),
            message: None,
        }
    }

    /// Additionally requires the attribute to be mandatory.
    #[must_use]
    pub fn mandatory(mut self) -> Self {
        self.must_be_mandatory = true;
        self
    }

    /// Additionally requires the attribute to reference every named entity.
    #[must_use]
    pub fn with_referrals<I, S>(mut self, referrals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.referrals = referrals.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the generated failure message of the attribute check.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the required attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the accepted type codes.
    #[must_use]
    pub fn accepted_types(&self) -> &AcceptedTypes {
        &self.accepted_types
    }

    /// Returns whether the attribute must be mandatory.
    #[must_use]
    pub fn must_be_mandatory(&self) -> bool {
        self.must_be_mandatory
    }

    /// Returns entity names the attribute must reference.
    #[must_use]
    pub fn referrals(&self) -> &[String] {
        &self.referrals
    }

    /// Returns the custom failure message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
