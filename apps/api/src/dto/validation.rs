mod conversions;
mod types;

pub use types::{
    AttrRequirementRequest, IssueResponse, PluginSchemaValidationResponse,
    ValidatePluginSchemaRequest, ValidationErrorDetailResponse, ValidationErrorReportResponse,
    ValidationResultResponse,
};
