use airone_core::AppError;
use airone_domain::AttrType;
use axum::Json;
use axum::extract::Path;

use crate::dto::AttrTypeResponse;
use crate::error::ApiResult;

pub async fn list_attr_types_handler() -> Json<Vec<AttrTypeResponse>> {
    Json(AttrType::all().map(AttrTypeResponse::from).collect())
}

pub async fn get_attr_type_handler(
    Path(attr_type): Path<String>,
) -> ApiResult<Json<AttrTypeResponse>> {
    let resolved = attr_type
        .parse::<AttrType>()
        .ok()
        .filter(|resolved| resolved.as_str().is_some())
        .ok_or_else(|| {
            AppError::NotFound(format!("attribute type '{attr_type}' is not registered"))
        })?;

    Ok(Json(AttrTypeResponse::from(resolved)))
}
