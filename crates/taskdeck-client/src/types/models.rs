/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::TaskStatus;

/// A task resource as returned by the service.
/// The service omits `description` from responses when it is unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub uuid: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn task_deserializes_without_description() {
        let value = json!({
            "uuid": "5f0c54c6-9d9e-4a3f-a2e5-0a2f2f9f6b01",
            "title": "Call the client",
            "status": "in_progress"
        });

        let task: Task = serde_json::from_value(value).expect("task should deserialize");

        assert_eq!(task.description, None);
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test]
    fn task_serialization_omits_unset_description() {
        let task = Task {
            uuid: "5f0c54c6-9d9e-4a3f-a2e5-0a2f2f9f6b01".to_string(),
            title: "Call the client".to_string(),
            description: None,
            status: TaskStatus::Created,
        };

        let value = serde_json::to_value(&task).expect("task should serialize");
        assert!(value.get("description").is_none());
    }
}
