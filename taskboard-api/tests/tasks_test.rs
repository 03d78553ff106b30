//! Integration tests for the task endpoints

mod common;

use axum::http::StatusCode;
use common::TestContext;
use serde_json::json;

#[tokio::test]
async fn test_create_task_defaults_status() {
    let ctx = TestContext::new().await.unwrap();
    let project_id = ctx.create_project("Alpha", None).await;

    let (status, body) = ctx
        .post("/tasks/", json!({"name": "T1", "project_id": project_id}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "T1", "status": "pending", "project_id": project_id})
    );
}

#[tokio::test]
async fn test_create_task_keeps_given_status() {
    let ctx = TestContext::new().await.unwrap();
    let project_id = ctx.create_project("Alpha", None).await;

    let (status, body) = ctx
        .post(
            "/tasks/",
            json!({"name": "T1", "status": "in progress", "project_id": project_id}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "in progress");
}

#[tokio::test]
async fn test_create_task_schema_mismatch_is_422() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx.post("/tasks/", json!({"name": "T1"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");

    let (status, _) = ctx
        .post("/tasks/", json!({"name": "T1", "project_id": "one"}))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = ctx
        .post("/tasks/", json!({"name": "T1", "status": "", "project_id": 1}))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "status");
}

#[tokio::test]
async fn test_create_task_for_missing_project_conflicts() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx
        .post("/tasks/", json!({"name": "Orphan", "project_id": 99}))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Project 99 does not exist");

    let (_, list) = ctx.get("/tasks/").await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_tasks_by_project() {
    let ctx = TestContext::new().await.unwrap();
    let alpha = ctx.create_project("Alpha", None).await;
    let beta = ctx.create_project("Beta", None).await;

    ctx.create_task("A1", alpha).await;
    ctx.create_task("B1", beta).await;
    ctx.create_task("A2", alpha).await;

    let (status, body) = ctx.get(&format!("/projects/{alpha}/tasks")).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["A1", "A2"]);

    let (status, body) = ctx.get("/tasks/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, body) = ctx.get("/tasks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_tasks_for_unknown_project_is_empty() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx.get("/projects/12345/tasks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_update_task_overwrites_every_field() {
    let ctx = TestContext::new().await.unwrap();
    let alpha = ctx.create_project("Alpha", None).await;
    let beta = ctx.create_project("Beta", None).await;
    let task_id = ctx.create_task("T1", alpha).await;

    let (status, body) = ctx
        .put(
            &format!("/tasks/{task_id}"),
            json!({"name": "T1 moved", "status": "done", "project_id": beta}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": task_id, "name": "T1 moved", "status": "done", "project_id": beta})
    );

    let (_, alpha_tasks) = ctx.get(&format!("/projects/{alpha}/tasks")).await;
    assert!(alpha_tasks.as_array().unwrap().is_empty());

    // Omitting status on a full update resets it
    let (_, body) = ctx
        .put(
            &format!("/tasks/{task_id}"),
            json!({"name": "T1 moved", "project_id": beta}),
        )
        .await;
    assert_eq!(body["status"], "pending");
}

#[tokio::test]
async fn test_update_task_requires_project_id() {
    let ctx = TestContext::new().await.unwrap();
    let project_id = ctx.create_project("Alpha", None).await;
    let task_id = ctx.create_task("T1", project_id).await;

    let (status, _) = ctx
        .put(&format!("/tasks/{task_id}"), json!({"name": "T1"}))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_task_to_missing_project_conflicts() {
    let ctx = TestContext::new().await.unwrap();
    let project_id = ctx.create_project("Alpha", None).await;
    let task_id = ctx.create_task("T1", project_id).await;

    let (status, _) = ctx
        .put(
            &format!("/tasks/{task_id}"),
            json!({"name": "T1", "project_id": 500}),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = ctx.get(&format!("/tasks/{task_id}")).await;
    assert_eq!(body["project_id"], project_id);
}

#[tokio::test]
async fn test_missing_task_returns_404() {
    let ctx = TestContext::new().await.unwrap();
    let project_id = ctx.create_project("Alpha", None).await;

    let (status, body) = ctx.get("/tasks/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Task not found");

    let (status, _) = ctx
        .put("/tasks/3", json!({"name": "x", "project_id": project_id}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = ctx.delete("/tasks/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_task() {
    let ctx = TestContext::new().await.unwrap();
    let project_id = ctx.create_project("Alpha", None).await;
    let task_id = ctx.create_task("T1", project_id).await;

    let (status, body) = ctx.delete(&format!("/tasks/{task_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Task deleted successfully"}));

    let (status, _) = ctx.get(&format!("/tasks/{task_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
