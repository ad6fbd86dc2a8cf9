/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Task lifecycle status as defined by the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Created,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Every status, in the order the service sorts by
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Created,
        TaskStatus::InProgress,
        TaskStatus::Done,
    ];

    /// Wire value used in JSON bodies and query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Created => "created",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    /// Human-readable label for pills and selects
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Created => "created",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Done => "done",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TaskStatus::Created, "created")]
    #[case(TaskStatus::InProgress, "in_progress")]
    #[case(TaskStatus::Done, "done")]
    fn wire_value_matches_serde(#[case] status: TaskStatus, #[case] expected: &str) {
        assert_eq!(status.as_str(), expected);
        let serialized = serde_json::to_string(&status).expect("serialize status");
        assert_eq!(serialized, format!("\"{expected}\""));
    }

    #[test]
    fn default_status_is_created() {
        assert_eq!(TaskStatus::default(), TaskStatus::Created);
    }
}
