use airone_domain::{EntityStructure, Issue, IssueCode, ValidationResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::EntitySchema;

/// Aggregated, display-ready view of validation issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorReport {
    /// `"{N} validation error(s) found"`.
    pub summary: String,
    /// One entry per issue, in issue order.
    pub details: Vec<ValidationErrorDetail>,
}

/// One line of a [`ValidationErrorReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
    /// Dotted path, or `(root)` for entity-level issues.
    pub path: String,
    /// Human-readable message.
    pub message: String,
    /// Issue category.
    pub code: IssueCode,
}

/// Runs the schema refinements against an already converted entity.
#[must_use]
pub fn validate_entity_structure(
    entity: &EntityStructure,
    schema: &EntitySchema,
) -> ValidationResult {
    match schema.check(entity) {
        None => ValidationResult::ok(),
        Some(issue) => {
            debug!(
                entity = entity.name(),
                message = issue.message(),
                "plugin entity schema refinement failed"
            );
            ValidationResult::from_issues(vec![issue])
        }
    }
}

/// Validates an untyped entity value, reporting shape issues as data.
#[must_use]
pub fn validate_raw_entity_structure(entity: &Value, schema: &EntitySchema) -> ValidationResult {
    match schema.safe_parse(entity) {
        Ok(_) => ValidationResult::ok(),
        Err(issues) => {
            debug!(
                issues = issues.len(),
                "raw entity failed plugin schema validation"
            );
            ValidationResult::from_issues(issues)
        }
    }
}

/// Renders each issue as `"{dotted.path}: {message}"`, or the bare message for
/// root issues.
#[must_use]
pub fn format_validation_errors(issues: &[Issue]) -> Vec<String> {
    issues
        .iter()
        .map(|issue| {
            if issue.path().is_root() {
                issue.message().to_owned()
            } else {
                format!("{}: {}", issue.path().dotted(), issue.message())
            }
        })
        .collect()
}

/// Builds a summary line plus per-issue details.
#[must_use]
pub fn create_validation_error_report(issues: &[Issue]) -> ValidationErrorReport {
    let noun = if issues.len() == 1 { "error" } else { "errors" };

    ValidationErrorReport {
        summary: format!("{} validation {noun} found", issues.len()),
        details: issues
            .iter()
            .map(|issue| ValidationErrorDetail {
                path: if issue.path().is_root() {
                    "(root)".to_owned()
                } else {
                    issue.path().dotted()
                },
                message: issue.message().to_owned(),
                code: issue.code(),
            })
            .collect(),
    }
}
