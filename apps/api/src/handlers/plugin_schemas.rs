use airone_application::{
    AttrRequirement, create_entity_schema, to_entity_structure, validate_entity_structure,
    validate_raw_entity_structure,
};
use airone_domain::EntityDetail;
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::dto::{PluginSchemaValidationResponse, ValidatePluginSchemaRequest};

pub async fn validate_plugin_schema_handler(
    Json(payload): Json<ValidatePluginSchemaRequest>,
) -> Json<PluginSchemaValidationResponse> {
    let schema = create_entity_schema(
        payload
            .requirements
            .into_iter()
            .map(AttrRequirement::from),
    );

    let result = match EntityDetail::deserialize(&payload.entity) {
        Ok(detail) => validate_entity_structure(&to_entity_structure(&detail), &schema),
        Err(error) => {
            debug!(%error, "entity payload is not an entity detail, validating raw shape");
            validate_raw_entity_structure(&payload.entity, &schema)
        }
    };

    Json(PluginSchemaValidationResponse::from(result))
}
