use airone_application::{
    AttrRequirement, ValidationErrorDetail, ValidationErrorReport,
    create_validation_error_report, format_validation_errors,
};
use airone_domain::{Issue, PathSegment, ValidationResult};
use serde_json::Value;

use super::types::{
    AttrRequirementRequest, IssueResponse, PluginSchemaValidationResponse,
    ValidationErrorDetailResponse, ValidationErrorReportResponse, ValidationResultResponse,
};

impl From<AttrRequirementRequest> for AttrRequirement {
    fn from(value: AttrRequirementRequest) -> Self {
        let mut requirement = AttrRequirement::new(value.name, value.attr_type);
        if value.must_be_mandatory.unwrap_or(false) {
            requirement = requirement.mandatory();
        }
        if let Some(referrals) = value.referrals {
            requirement = requirement.with_referrals(referrals);
        }
        if let Some(message) = value.message {
            requirement = requirement.with_message(message);
        }
        requirement
    }
}

impl From<&Issue> for IssueResponse {
    fn from(value: &Issue) -> Self {
        Self {
            path: value
                .path()
                .segments()
                .iter()
                .map(|segment| match segment {
                    PathSegment::Index(index) => Value::from(*index),
                    PathSegment::Key(key) => Value::from(key.as_str()),
                })
                .collect(),
            message: value.message().to_owned(),
            code: value.code().as_str().to_owned(),
        }
    }
}

impl From<ValidationResult> for ValidationResultResponse {
    fn from(value: ValidationResult) -> Self {
        Self {
            success: value.is_success(),
            errors: value.errors().iter().map(IssueResponse::from).collect(),
        }
    }
}

impl From<ValidationErrorDetail> for ValidationErrorDetailResponse {
    fn from(value: ValidationErrorDetail) -> Self {
        Self {
            path: value.path,
            message: value.message,
            code: value.code.as_str().to_owned(),
        }
    }
}

impl From<ValidationErrorReport> for ValidationErrorReportResponse {
    fn from(value: ValidationErrorReport) -> Self {
        Self {
            summary: value.summary,
            details: value
                .details
                .into_iter()
                .map(ValidationErrorDetailResponse::from)
                .collect(),
        }
    }
}

impl From<ValidationResult> for PluginSchemaValidationResponse {
    fn from(value: ValidationResult) -> Self {
        Self {
            success: value.is_success(),
            errors: value.errors().iter().map(IssueResponse::from).collect(),
            messages: format_validation_errors(value.errors()),
            report: create_validation_error_report(value.errors()).into(),
        }
    }
}
