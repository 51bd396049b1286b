use airone_domain::{EntityAttrStructure, EntityDetail, EntityReferral, EntityStructure};

/// Projects a backend entity detail onto the fields plugin schemas inspect.
///
/// Everything except `id`, `name` and each attribute's
/// `id, name, type, isMandatory, referral` is dropped. A missing referral list
/// becomes empty.
#[must_use]
pub fn to_entity_structure(entity: &EntityDetail) -> EntityStructure {
    let attrs = entity
        .attrs
        .iter()
        .map(|attr| {
            let referral = attr
                .referral
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|referral| EntityReferral::new(referral.id, referral.name.as_str()))
                .collect();

            EntityAttrStructure::new(
                attr.id,
                attr.name.as_str(),
                attr.attr_type,
                attr.is_mandatory,
                referral,
            )
        })
        .collect();

    EntityStructure::new(entity.id, entity.name.as_str(), attrs)
}
