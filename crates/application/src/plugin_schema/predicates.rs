use airone_domain::EntityAttrStructure;

use super::AcceptedTypes;

/// Options for [`require_attr`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequireAttrOptions {
    /// Also fail when the attribute is optional.
    pub must_be_mandatory: bool,
}

/// Options for [`require_referral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequireReferralOptions {
    /// Require every listed entity (`true`) or at least one (`false`).
    pub require_all: bool,
}

impl Default for RequireReferralOptions {
    fn default() -> Self {
        Self { require_all: true }
    }
}

fn find_attr<'a>(attrs: &'a [EntityAttrStructure], name: &str) -> Option<&'a EntityAttrStructure> {
    attrs.iter().find(|attr| attr.name() == name)
}

/// Builds a predicate that holds when an attribute named `name` exists with
/// one of `accepted_types`, and is mandatory when the options ask for it.
pub fn require_attr(
    name: impl Into<String>,
    accepted_types: impl Into<AcceptedTypes>,
    options: RequireAttrOptions,
) -> impl Fn(&[EntityAttrStructure]) -> bool + Send + Sync + 'static {
    let name = name.into();
    let accepted_types = accepted_types.into();

    move |attrs: &[EntityAttrStructure]| {
        let Some(attr) = find_attr(attrs, name.as_str()) else {
            return false;
        };

        if !accepted_types.accepts(attr.attr_type()) {
            return false;
        }

        !options.must_be_mandatory || attr.is_mandatory()
    }
}

/// Builds a predicate that holds when an attribute named `attr_name` exists
/// and its referrals include the listed entities.
///
/// With `require_all` an empty `entity_names` list is satisfied by any
/// existing attribute; without it an empty list never matches.
pub fn require_referral<I, S>(
    attr_name: impl Into<String>,
    entity_names: I,
    options: RequireReferralOptions,
) -> impl Fn(&[EntityAttrStructure]) -> bool + Send + Sync + 'static
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let attr_name = attr_name.into();
    let entity_names: Vec<String> = entity_names.into_iter().map(Into::into).collect();

    move |attrs: &[EntityAttrStructure]| {
        let Some(attr) = find_attr(attrs, attr_name.as_str()) else {
            return false;
        };

        if options.require_all {
            entity_names.iter().all(|name| attr.refers_to(name))
        } else {
            entity_names.iter().any(|name| attr.refers_to(name))
        }
    }
}
