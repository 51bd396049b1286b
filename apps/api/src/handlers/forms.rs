use airone_application::{
    AclForm, EntityForm, EntryForm, validate_acl_form, validate_entity_form, validate_entry_form,
};
use axum::Json;

use crate::dto::ValidationResultResponse;

pub async fn validate_entity_form_handler(
    Json(payload): Json<EntityForm>,
) -> Json<ValidationResultResponse> {
    Json(validate_entity_form(&payload).into())
}

pub async fn validate_entry_form_handler(
    Json(payload): Json<EntryForm>,
) -> Json<ValidationResultResponse> {
    Json(validate_entry_form(&payload).into())
}

pub async fn validate_acl_form_handler(
    Json(payload): Json<AclForm>,
) -> Json<ValidationResultResponse> {
    Json(validate_acl_form(&payload).into())
}

#[cfg(test)]
mod tests {
    use airone_application::{AclForm, EntityForm, EntryForm};
    use axum::Json;
    use serde::de::DeserializeOwned;
    use serde_json::{Value, json};

    use super::{
        validate_acl_form_handler, validate_entity_form_handler, validate_entry_form_handler,
    };

    fn payload<T: DeserializeOwned>(value: Value) -> Json<T> {
        Json(serde_json::from_value(value).unwrap_or_else(|_| unreachable!()))
    }

    #[tokio::test]
    async fn entity_form_flags_every_duplicate_row() {
        let form: Json<EntityForm> = payload(json!({
            "name": "Server",
            "attrs": [
                {"name": "a", "type": 2},
                {"name": "b", "type": 2},
                {"name": "a", "type": 2}
            ]
        }));

        let Json(response) = validate_entity_form_handler(form).await;

        assert!(!response.success);
        let paths: Vec<Vec<Value>> = response
            .errors
            .iter()
            .map(|issue| issue.path.clone())
            .collect();
        assert_eq!(
            paths,
            vec![
                vec![json!("attrs"), json!(0), json!("name")],
                vec![json!("attrs"), json!(2), json!("name")],
            ]
        );
    }

    #[tokio::test]
    async fn entry_form_requires_mandatory_values() {
        let form: Json<EntryForm> = payload(json!({
            "name": "web01",
            "attrs": {
                "hostname": {"type": 2, "isMandatory": true, "value": ""},
                "memo": {"type": 4, "isMandatory": false, "value": ""}
            }
        }));

        let Json(response) = validate_entry_form_handler(form).await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].path,
            vec![json!("attrs"), json!("hostname"), json!("value")]
        );
    }

    #[tokio::test]
    async fn acl_form_accepts_public_objects() {
        let form: Json<AclForm> = payload(json!({
            "isPublic": true,
            "defaultPermission": 1,
            "roles": []
        }));

        let Json(response) = validate_acl_form_handler(form).await;

        assert!(response.success);
        assert!(response.errors.is_empty());
    }

    #[tokio::test]
    async fn acl_form_reports_general_error_without_full_grantee() {
        let form: Json<AclForm> = payload(json!({
            "isPublic": false,
            "defaultPermission": 2,
            "roles": [{"id": 1, "name": "admin", "currentPermission": 4}]
        }));

        let Json(response) = validate_acl_form_handler(form).await;

        assert!(!response.success);
        assert_eq!(response.errors[0].path, vec![json!("generalError")]);
        assert_eq!(response.errors[0].code, "custom");
    }
}
