//! Validation for the entity, entry and ACL edit forms.

mod acl_form;
mod entity_form;
mod entry_form;

pub use acl_form::{AclForm, AclRoleForm, validate_acl_form};
pub use entity_form::{EntityForm, EntityFormAttr, WebhookForm, WebhookHeader, validate_entity_form};
pub use entry_form::{EntryForm, EntryFormAttr, validate_entry_form};

#[cfg(test)]
mod tests;
