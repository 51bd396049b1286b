use airone_application::AcceptedTypes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// One plugin requirement in a schema validation request.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/attr-requirement-request.ts"
)]
pub struct AttrRequirementRequest {
    pub name: String,
    #[serde(rename = "type")]
    #[ts(type = "number | number[]")]
    pub attr_type: AcceptedTypes,
    pub must_be_mandatory: Option<bool>,
    pub referrals: Option<Vec<String>>,
    pub message: Option<String>,
}

/// Incoming payload for plugin entity-schema validation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/validate-plugin-schema-request.ts"
)]
pub struct ValidatePluginSchemaRequest {
    #[ts(type = "unknown")]
    pub entity: Value,
    #[serde(default)]
    pub requirements: Vec<AttrRequirementRequest>,
}

/// API representation of one validation issue.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/issue-response.ts"
)]
pub struct IssueResponse {
    #[ts(type = "Array<string | number>")]
    pub path: Vec<Value>,
    pub message: String,
    pub code: String,
}

/// API representation of a validation result.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/validation-result-response.ts"
)]
pub struct ValidationResultResponse {
    pub success: bool,
    pub errors: Vec<IssueResponse>,
}

/// One detail line of a validation error report.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/validation-error-detail-response.ts"
)]
pub struct ValidationErrorDetailResponse {
    pub path: String,
    pub message: String,
    pub code: String,
}

/// Summary plus details for a schema validation error page.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/validation-error-report-response.ts"
)]
pub struct ValidationErrorReportResponse {
    pub summary: String,
    pub details: Vec<ValidationErrorDetailResponse>,
}

/// Response for plugin entity-schema validation.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/plugin-schema-validation-response.ts"
)]
pub struct PluginSchemaValidationResponse {
    pub success: bool,
    pub errors: Vec<IssueResponse>,
    pub messages: Vec<String>,
    pub report: ValidationErrorReportResponse,
}
