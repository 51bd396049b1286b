use airone_domain::AttrType;
use serde::Serialize;
use ts_rs::TS;

/// API representation of one registered attribute type.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/attr-type-response.ts"
)]
pub struct AttrTypeResponse {
    pub code: u16,
    pub key: Option<String>,
    pub name: String,
    pub is_object_like: bool,
    pub is_array: bool,
    pub is_named: bool,
}

impl From<AttrType> for AttrTypeResponse {
    fn from(value: AttrType) -> Self {
        Self {
            code: value.code(),
            key: value.as_str().map(str::to_owned),
            name: value.label(),
            is_object_like: value.is_object_like(),
            is_array: value.is_array(),
            is_named: value.is_named(),
        }
    }
}
