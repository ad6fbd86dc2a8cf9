/*
[INPUT]:  Status filters, task identifiers, and JSON request bodies
[OUTPUT]: Typed task resources from the REST API
[POS]:    HTTP layer - task resource endpoints
[UPDATE]: When adding new task endpoints or changing response format
*/

use crate::http::{Result, TaskClient};
use crate::types::{CreateTask, Task, TaskStatus, UpdateTask};
use reqwest::Method;

impl TaskClient {
    /// List tasks with an optional status filter
    ///
    /// GET /tasks?status={status}
    pub async fn list_tasks(&self, status: Option<TaskStatus>) -> Result<Vec<Task>> {
        let endpoint = match status {
            Some(status) => format!("/tasks?status={}", status.as_str()),
            None => "/tasks".to_string(),
        };
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Fetch a single task by identifier
    ///
    /// GET /tasks/{uuid}
    pub async fn get_task(&self, uuid: &str) -> Result<Task> {
        let endpoint = format!("/tasks/{uuid}");
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Create a new task; the service assigns the uuid
    ///
    /// POST /tasks
    pub async fn create_task(&self, req: &CreateTask) -> Result<Task> {
        let builder = self.api_request(Method::POST, "/tasks")?.json(req);
        self.send_json(builder).await
    }

    /// Partially update an existing task. Fields left unset are not sent
    /// and keep their stored values.
    ///
    /// PATCH /tasks/{uuid}
    pub async fn update_task(&self, uuid: &str, req: &UpdateTask) -> Result<Task> {
        let endpoint = format!("/tasks/{uuid}");
        let builder = self.api_request(Method::PATCH, &endpoint)?.json(req);
        self.send_json(builder).await
    }

    /// Delete a task
    ///
    /// DELETE /tasks/{uuid} — the service answers 204 on success
    pub async fn delete_task(&self, uuid: &str) -> Result<()> {
        let endpoint = format!("/tasks/{uuid}");
        let builder = self.api_request(Method::DELETE, &endpoint)?;
        self.send_no_content(builder).await
    }

    /// Service liveness probe
    ///
    /// GET /health
    pub async fn health(&self) -> Result<()> {
        let builder = self.api_request(Method::GET, "/health")?;
        let _: serde_json::Value = self.send_json(builder).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{TaskApiError, TaskClient};
    use crate::types::{CreateTask, Task, TaskStatus, UpdateTask};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const UUID_A: &str = "a1b2c3d4-0000-4000-8000-000000000001";
    const UUID_B: &str = "a1b2c3d4-0000-4000-8000-000000000002";

    fn client_for(server: &MockServer) -> TaskClient {
        TaskClient::with_base_url(&server.uri()).expect("client init")
    }

    #[tokio::test]
    async fn test_list_tasks_with_status_filter() {
        let server = MockServer::start().await;
        let mock_response = format!(
            r#"[
                {{"uuid": "{UUID_A}", "title": "Write report", "status": "in_progress"}},
                {{"uuid": "{UUID_B}", "title": "Review notes", "description": "chapters 1-3", "status": "in_progress"}}
            ]"#
        );

        let _mock = Mock::given(method("GET"))
            .and(path("/tasks"))
            .and(query_param("status", "in_progress"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .list_tasks(Some(TaskStatus::InProgress))
            .await
            .expect("list_tasks failed");

        let expected = vec![
            Task {
                uuid: UUID_A.to_string(),
                title: "Write report".to_string(),
                description: None,
                status: TaskStatus::InProgress,
            },
            Task {
                uuid: UUID_B.to_string(),
                title: "Review notes".to_string(),
                description: Some("chapters 1-3".to_string()),
                status: TaskStatus::InProgress,
            },
        ];
        assert_eq!(response, expected);
    }

    #[tokio::test]
    async fn test_list_tasks_without_filter_sends_no_query() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw("[]", "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .list_tasks(None)
            .await
            .expect("list_tasks failed");
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_get_task_not_found() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path(format!("/tasks/{UUID_A}")))
            .respond_with(ResponseTemplate::new(404).set_body_string("task not found"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_task(UUID_A)
            .await
            .expect_err("expected 404 to map to an error");
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_create_task_posts_payload() {
        let server = MockServer::start().await;
        let req = CreateTask {
            title: "Buy groceries".to_string(),
            description: Some("bread and milk".to_string()),
            status: TaskStatus::Created,
        };

        let _mock = Mock::given(method("POST"))
            .and(path("/tasks"))
            .and(body_json(json!({
                "title": "Buy groceries",
                "description": "bread and milk",
                "status": "created"
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(
                        format!(
                            r#"{{"uuid": "{UUID_A}", "title": "Buy groceries", "description": "bread and milk", "status": "created"}}"#
                        ),
                        "application/json",
                    ),
            )
            .expect(1)
            .mount(&server)
            .await;

        let task = client_for(&server)
            .create_task(&req)
            .await
            .expect("create_task failed");
        assert_eq!(task.uuid, UUID_A);
        assert_eq!(task.status, TaskStatus::Created);
    }

    #[tokio::test]
    async fn test_update_task_omits_unset_fields() {
        let server = MockServer::start().await;
        let req = UpdateTask {
            title: None,
            description: None,
            status: Some(TaskStatus::Done),
        };

        let _mock = Mock::given(method("PATCH"))
            .and(path(format!("/tasks/{UUID_A}")))
            .and(body_json(json!({"status": "done"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(
                        format!(r#"{{"uuid": "{UUID_A}", "title": "Write report", "status": "done"}}"#),
                        "application/json",
                    ),
            )
            .expect(1)
            .mount(&server)
            .await;

        let task = client_for(&server)
            .update_task(UUID_A, &req)
            .await
            .expect("update_task failed");
        assert_eq!(task.status, TaskStatus::Done);
    }

    #[tokio::test]
    async fn test_delete_task_accepts_204() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("DELETE"))
            .and(path(format!("/tasks/{UUID_A}")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .delete_task(UUID_A)
            .await
            .expect("delete_task failed");
    }

    #[tokio::test]
    async fn test_delete_task_rejects_other_success_statuses() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("DELETE"))
            .and(path(format!("/tasks/{UUID_A}")))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .delete_task(UUID_A)
            .await
            .expect_err("only 204 may pass");
        assert!(matches!(err, TaskApiError::Api { code: 200, .. }));
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(r#"{"status": "ok"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).health().await.expect("health failed");
    }
}
