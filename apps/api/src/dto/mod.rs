mod attr_types;
mod common;
mod validation;

pub use attr_types::AttrTypeResponse;
pub use common::HealthResponse;
pub use validation::{
    AttrRequirementRequest, IssueResponse, PluginSchemaValidationResponse,
    ValidatePluginSchemaRequest, ValidationErrorDetailResponse, ValidationErrorReportResponse,
    ValidationResultResponse,
};
