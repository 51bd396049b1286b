use std::fmt::{Display, Formatter};
use std::ops::BitOr;
use std::str::FromStr;

use airone_core::AppError;
use serde::{Deserialize, Serialize};

/// Attribute type code shared with the backend as a bit-flag integer.
///
/// A code is one base bit (`OBJECT`, `STRING`, ...) optionally combined with
/// the `ARRAY` and `NAMED` modifier bits. Integer values are part of the wire
/// contract and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttrType(u16);

impl AttrType {
    /// Reference to another entry.
    pub const OBJECT: Self = Self(1);
    /// Single-line string.
    pub const STRING: Self = Self(2);
    /// Multi-line text.
    pub const TEXT: Self = Self(4);
    /// Boolean flag.
    pub const BOOLEAN: Self = Self(8);
    /// Reference to a user group.
    pub const GROUP: Self = Self(16);
    /// Calendar date.
    pub const DATE: Self = Self(32);
    /// Reference to a role.
    pub const ROLE: Self = Self(64);
    /// Date with time of day.
    pub const DATETIME: Self = Self(128);
    /// Numeric value.
    pub const NUMBER: Self = Self(256);

    /// Modifier bit marking a list of values.
    pub const ARRAY: Self = Self(1024);
    /// Modifier bit marking a value paired with a free-form name.
    pub const NAMED: Self = Self(2048);

    /// Named reference to another entry.
    pub const NAMED_OBJECT: Self = Self(Self::NAMED.0 | Self::OBJECT.0);
    /// List of entry references.
    pub const ARRAY_OBJECT: Self = Self(Self::ARRAY.0 | Self::OBJECT.0);
    /// List of strings.
    pub const ARRAY_STRING: Self = Self(Self::ARRAY.0 | Self::STRING.0);
    /// List of named entry references.
    pub const ARRAY_NAMED_OBJECT: Self = Self(Self::ARRAY.0 | Self::NAMED.0 | Self::OBJECT.0);
    /// List of named entry references carrying a boolean.
    pub const ARRAY_NAMED_OBJECT_BOOLEAN: Self =
        Self(Self::ARRAY.0 | Self::NAMED.0 | Self::OBJECT.0 | Self::BOOLEAN.0);
    /// List of group references.
    pub const ARRAY_GROUP: Self = Self(Self::ARRAY.0 | Self::GROUP.0);
    /// List of role references.
    pub const ARRAY_ROLE: Self = Self(Self::ARRAY.0 | Self::ROLE.0);

    const MODIFIER_MASK: u16 = Self::ARRAY.0 | Self::NAMED.0;

    const REGISTRY: &'static [(Self, &'static str, &'static str)] = &[
        (Self::OBJECT, "object", "Object"),
        (Self::STRING, "string", "String"),
        (Self::TEXT, "text", "Text"),
        (Self::BOOLEAN, "boolean", "Boolean"),
        (Self::GROUP, "group", "Group"),
        (Self::DATE, "date", "Date"),
        (Self::ROLE, "role", "Role"),
        (Self::DATETIME, "datetime", "Datetime"),
        (Self::NUMBER, "number", "Number"),
        (Self::NAMED_OBJECT, "named_object", "Named Object"),
        (Self::ARRAY_OBJECT, "array_object", "Array Object"),
        (Self::ARRAY_STRING, "array_string", "Array String"),
        (Self::ARRAY_NAMED_OBJECT, "array_named_object", "Array Named Object"),
        (
            Self::ARRAY_NAMED_OBJECT_BOOLEAN,
            "array_named_object_boolean",
            "Array Named Object Boolean",
        ),
        (Self::ARRAY_GROUP, "array_group", "Array Group"),
        (Self::ARRAY_ROLE, "array_role", "Array Role"),
    ];

    /// Wraps a raw wire code. Unregistered codes are kept as-is.
    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        Self(code)
    }

    /// Returns the wire code.
    #[must_use]
    pub const fn code(self) -> u16 {
        self.0
    }

    /// Returns every registered attribute type in registry order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::REGISTRY.iter().map(|(attr_type, _, _)| *attr_type)
    }

    /// Returns whether every bit of `flag` is set.
    #[must_use]
    pub const fn contains(self, flag: Self) -> bool {
        self.0 & flag.0 == flag.0
    }

    /// Returns whether values of this type reference entries.
    ///
    /// Object-like attributes must declare at least one referral entity.
    #[must_use]
    pub const fn is_object_like(self) -> bool {
        self.0 & Self::OBJECT.0 != 0
    }

    /// Returns whether the array modifier is set.
    #[must_use]
    pub const fn is_array(self) -> bool {
        self.contains(Self::ARRAY)
    }

    /// Returns whether the named modifier is set.
    #[must_use]
    pub const fn is_named(self) -> bool {
        self.contains(Self::NAMED)
    }

    /// Returns the type with modifier bits stripped.
    #[must_use]
    pub const fn base(self) -> Self {
        Self(self.0 & !Self::MODIFIER_MASK)
    }

    /// Returns the type of one element of an array type.
    #[must_use]
    pub const fn element_type(self) -> Self {
        Self(self.0 & !Self::ARRAY.0)
    }

    /// Returns the stable machine key for registered types.
    #[must_use]
    pub fn as_str(self) -> Option<&'static str> {
        Self::REGISTRY
            .iter()
            .find(|(attr_type, _, _)| *attr_type == self)
            .map(|(_, key, _)| *key)
    }

    /// Returns the human-readable name for registered types.
    #[must_use]
    pub fn display_name(self) -> Option<&'static str> {
        Self::REGISTRY
            .iter()
            .find(|(attr_type, _, _)| *attr_type == self)
            .map(|(_, _, name)| *name)
    }

    /// Returns the display name, or `type {code}` for unregistered codes.
    #[must_use]
    pub fn label(self) -> String {
        self.display_name()
            .map(str::to_owned)
            .unwrap_or_else(|| format!("type {}", self.0))
    }
}

impl BitOr for AttrType {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl From<AttrType> for u16 {
    fn from(value: AttrType) -> Self {
        value.0
    }
}

impl Display for AttrType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.label().as_str())
    }
}

impl FromStr for AttrType {
    type Err = AppError;

    /// Parses a machine key (`array_string`) or a numeric wire code.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = value.parse::<u16>() {
            return Ok(Self(code));
        }

        Self::REGISTRY
            .iter()
            .find(|(_, key, _)| *key == value)
            .map(|(attr_type, _, _)| *attr_type)
            .ok_or_else(|| AppError::Validation(format!("unknown attribute type '{value}'")))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use proptest::prelude::*;
    use serde_json::json;

    use super::AttrType;

    const BASES: [AttrType; 9] = [
        AttrType::OBJECT,
        AttrType::STRING,
        AttrType::TEXT,
        AttrType::BOOLEAN,
        AttrType::GROUP,
        AttrType::DATE,
        AttrType::ROLE,
        AttrType::DATETIME,
        AttrType::NUMBER,
    ];

    #[test]
    fn combined_codes_keep_wire_values() {
        assert_eq!(AttrType::NAMED_OBJECT.code(), 2049);
        assert_eq!(AttrType::ARRAY_OBJECT.code(), 1025);
        assert_eq!(AttrType::ARRAY_STRING.code(), 1026);
        assert_eq!(AttrType::ARRAY_NAMED_OBJECT.code(), 3073);
        assert_eq!(AttrType::ARRAY_NAMED_OBJECT_BOOLEAN.code(), 3081);
        assert_eq!(AttrType::ARRAY_GROUP.code(), 1040);
        assert_eq!(AttrType::ARRAY_ROLE.code(), 1088);
        assert_eq!(AttrType::ARRAY | AttrType::OBJECT, AttrType::ARRAY_OBJECT);
        assert_eq!(AttrType::ARRAY_NAMED_OBJECT.element_type(), AttrType::NAMED_OBJECT);
    }

    #[test]
    fn object_like_covers_every_object_variant() {
        let object_like: Vec<AttrType> =
            AttrType::all().filter(|attr_type| attr_type.is_object_like()).collect();
        assert_eq!(
            object_like,
            vec![
                AttrType::OBJECT,
                AttrType::NAMED_OBJECT,
                AttrType::ARRAY_OBJECT,
                AttrType::ARRAY_NAMED_OBJECT,
                AttrType::ARRAY_NAMED_OBJECT_BOOLEAN,
            ]
        );
    }

    #[test]
    fn unknown_code_renders_fallback_label() {
        assert_eq!(AttrType::STRING.label(), "String");
        assert_eq!(AttrType::from_code(999).label(), "type 999");
        assert_eq!(AttrType::from_code(999).display_name(), None);
    }

    #[test]
    fn serializes_as_bare_integer() {
        let value = serde_json::to_value(AttrType::ARRAY_STRING).unwrap_or_default();
        assert_eq!(value, json!(1026));
    }

    #[test]
    fn parses_machine_key_and_numeric_code() {
        assert_eq!(
            AttrType::from_str("array_named_object").ok(),
            Some(AttrType::ARRAY_NAMED_OBJECT)
        );
        assert_eq!(AttrType::from_str("2").ok(), Some(AttrType::STRING));
        assert!(AttrType::from_str("blob").is_err());
    }

    proptest! {
        #[test]
        fn modifiers_never_change_base(
            base_index in 0usize..BASES.len(),
            array in any::<bool>(),
            named in any::<bool>(),
        ) {
            let base = BASES[base_index];
            let mut attr_type = base;
            if array {
                attr_type = attr_type | AttrType::ARRAY;
            }
            if named {
                attr_type = attr_type | AttrType::NAMED;
            }

            prop_assert_eq!(attr_type.base(), base);
            prop_assert_eq!(attr_type.is_array(), array);
            prop_assert_eq!(attr_type.is_named(), named);
            prop_assert_eq!(attr_type.is_object_like(), base == AttrType::OBJECT);
        }
    }
}
