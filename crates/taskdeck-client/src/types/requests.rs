/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::TaskStatus;

/// Body for POST /tasks. The service assigns the uuid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
}

/// Body for PATCH /tasks/{uuid}. The update is partial: fields left as
/// `None` are omitted from the body and keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_serializes_only_set_fields() {
        let req = UpdateTask {
            title: Some("New title".to_string()),
            ..UpdateTask::default()
        };

        let value = serde_json::to_value(&req).expect("request should serialize");
        assert_eq!(value, json!({"title": "New title"}));
    }

    #[test]
    fn create_defaults_status_to_created() {
        let req = CreateTask {
            title: "Walk the dog".to_string(),
            description: None,
            status: TaskStatus::default(),
        };

        let value = serde_json::to_value(&req).expect("request should serialize");
        assert_eq!(value, json!({"title": "Walk the dog", "status": "created"}));
    }
}
