mod cors;

use airone_core::AppResult;
use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;

pub fn build_router(frontend_url: &str) -> AppResult<Router> {
    let api_routes = Router::new()
        .route(
            "/api/attr-types",
            get(handlers::attr_types::list_attr_types_handler),
        )
        .route(
            "/api/attr-types/{attr_type}",
            get(handlers::attr_types::get_attr_type_handler),
        )
        .route(
            "/api/plugin-schemas/validate",
            post(handlers::plugin_schemas::validate_plugin_schema_handler),
        )
        .route(
            "/api/entity-forms/validate",
            post(handlers::forms::validate_entity_form_handler),
        )
        .route(
            "/api/entry-forms/validate",
            post(handlers::forms::validate_entry_form_handler),
        )
        .route(
            "/api/acl-forms/validate",
            post(handlers::forms::validate_acl_form_handler),
        );

    Ok(Router::new()
        .route("/health", get(handlers::health_handler))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors::build_cors_layer(frontend_url)?))
}
