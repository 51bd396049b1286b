use std::fmt::{Debug, Formatter};

use airone_domain::{EntityAttrStructure, EntityStructure, Issue, IssuePath};
use serde_json::Value;
use tracing::debug;

use super::shape::parse_entity_structure;
use super::{
    AcceptedTypes, AttrRequirement, RequireAttrOptions, RequireReferralOptions, require_attr,
    require_referral,
};

type AttrsPredicate = Box<dyn Fn(&[EntityAttrStructure]) -> bool + Send + Sync>;

struct Refinement {
    predicate: AttrsPredicate,
    message: String,
}

/// Validatable entity schema: the base structural shape plus ordered
/// refinements over the attribute list.
///
/// Refinements run in insertion order and stop at the first failure.
#[derive(Default)]
pub struct EntitySchema {
    refinements: Vec<Refinement>,
}

impl EntitySchema {
    /// Returns a schema that only checks the structural shape.
    #[must_use]
    pub fn structural() -> Self {
        Self::default()
    }

    /// Appends a refinement reported with `message` when `predicate` fails.
    #[must_use]
    pub fn refine(
        mut self,
        predicate: impl Fn(&[EntityAttrStructure]) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        self.refinements.push(Refinement {
            predicate: Box::new(predicate),
            message: message.into(),
        });
        self
    }

    /// Returns the number of attached refinements.
    #[must_use]
    pub fn refinement_count(&self) -> usize {
        self.refinements.len()
    }

    /// Returns the issue of the first failing refinement.
    #[must_use]
    pub fn check(&self, entity: &EntityStructure) -> Option<Issue> {
        self.refinements
            .iter()
            .find(|refinement| !(refinement.predicate)(entity.attrs()))
            .map(|refinement| Issue::custom(IssuePath::root(), refinement.message.as_str()))
    }

    /// Parses a raw value against the shape and then runs the refinements.
    ///
    /// Refinements only run once the shape is valid.
    pub fn safe_parse(&self, value: &Value) -> Result<EntityStructure, Vec<Issue>> {
        let entity = parse_entity_structure(value)?;
        match self.check(&entity) {
            Some(issue) => Err(vec![issue]),
            None => Ok(entity),
        }
    }
}

impl Debug for EntitySchema {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("EntitySchema")
            .field(
                "refinements",
                &self
                    .refinements
                    .iter()
                    .map(|refinement| refinement.message.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Composes plugin requirements into one schema.
///
/// Each requirement adds an attribute check and, when it lists referrals, a
/// referral check right after it.
pub fn create_entity_schema(
    requirements: impl IntoIterator<Item = AttrRequirement>,
) -> EntitySchema {
    let mut schema = EntitySchema::structural();
    let mut requirement_count = 0_usize;

    for requirement in requirements {
        requirement_count += 1;

        let message = requirement.message().map_or_else(
            || missing_attr_message(requirement.name(), requirement.accepted_types()),
            str::to_owned,
        );
        schema = schema.refine(
            require_attr(
                requirement.name(),
                requirement.accepted_types().clone(),
                RequireAttrOptions {
                    must_be_mandatory: requirement.must_be_mandatory(),
                },
            ),
            message,
        );

        if !requirement.referrals().is_empty() {
            schema = schema.refine(
                require_referral(
                    requirement.name(),
                    requirement.referrals().to_vec(),
                    RequireReferralOptions { require_all: true },
                ),
                missing_referral_message(requirement.name(), requirement.referrals()),
            );
        }
    }

    debug!(
        requirements = requirement_count,
        refinements = schema.refinement_count(),
        "composed plugin entity schema"
    );

    schema
}

/// Formats `Attribute "{name}" ({Type/Type}) is required`.
#[must_use]
pub fn missing_attr_message(name: &str, accepted_types: &AcceptedTypes) -> String {
    let type_names = accepted_types
        .as_slice()
        .iter()
        .map(|attr_type| attr_type.label())
        .collect::<Vec<_>>()
        .join("/");

    format!("Attribute \"{name}\" ({type_names}) is required")
}

/// Formats `Attribute "{name}" must reference: {a, b}`.
#[must_use]
pub fn missing_referral_message(name: &str, referrals: &[String]) -> String {
    format!(
        "Attribute \"{name}\" must reference: {}",
        referrals.join(", ")
    )
}
