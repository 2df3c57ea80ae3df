//! End-to-end scenarios for filling in, submitting, and reloading the job
//! application through the public controller, file store, and HTTP router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use job_application::form::{
    form_router, Application, EducationEntry, EmploymentEntry, FormController, JsonFileStore,
    Notice,
};

async fn read_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[tokio::test]
async fn blank_storage_edit_submit_and_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = Arc::new(JsonFileStore::new(dir.path().join("formData.json")));
    let mut controller = FormController::new(store.clone());

    controller.initialize().await.expect("blank form loads");
    assert_eq!(
        controller.document().education,
        vec![EducationEntry {
            degree: String::new(),
            university: String::new(),
            year_of_graduate: String::new(),
            grade: String::new(),
            city: String::new(),
        }]
    );

    controller.set_field("fullName", "Jane Doe").expect("set name");
    controller
        .append_blank("employmentHistory")
        .expect("append employment row");
    assert_eq!(controller.submit().await, Notice::Saved);

    let mut reloaded = FormController::new(store);
    reloaded.initialize().await.expect("saved form loads");
    assert_eq!(reloaded.document().full_name, "Jane Doe");
    assert_eq!(reloaded.document().employment_history.len(), 2);
    assert_eq!(reloaded.document(), controller.document());
}

#[tokio::test]
async fn malformed_storage_fails_initialize() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("formData.json");
    std::fs::write(&path, "[not, json").expect("seed file");
    let mut controller = FormController::new(Arc::new(JsonFileStore::new(&path)));

    let result = controller.initialize().await;

    assert!(result.is_err());
    assert_eq!(controller.document(), &Application::default());
}

#[tokio::test]
async fn http_round_trip_persists_to_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("formData.json");
    let router = form_router(Arc::new(JsonFileStore::new(&path)));

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/load-data")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let mut document: Application =
        serde_json::from_value(read_json(response).await).expect("blank application");

    document.full_name = "Jane Doe".to_string();
    document.marital_status = "Married".to_string();
    document.dependents = "1".to_string();
    document.employment_history.push(EmploymentEntry {
        company: "Acme".to_string(),
        position: "Welder".to_string(),
        year: "2021".to_string(),
        reason_for_leaving: "Career change".to_string(),
    });

    let response = router
        .clone()
        .oneshot(
            Request::post("/api/save-data")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&document).expect("encode")))
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({ "message": "Data saved successfully" })
    );

    let on_disk: Application =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("file written"))
            .expect("file parses");
    assert_eq!(on_disk, document);

    let response = router
        .oneshot(
            Request::get("/api/load-data")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");
    let reloaded: Application =
        serde_json::from_value(read_json(response).await).expect("saved application");
    assert_eq!(reloaded, document);
}

#[tokio::test]
async fn malformed_storage_yields_server_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("formData.json");
    std::fs::write(&path, "{\"fullName\": ").expect("seed file");
    let router = form_router(Arc::new(JsonFileStore::new(&path)));

    let response = router
        .oneshot(
            Request::get("/api/load-data")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        read_json(response).await,
        json!({ "message": "Error loading data" })
    );
}

#[tokio::test]
async fn numeric_values_posted_as_numbers_are_stored_as_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("formData.json");
    let router = form_router(Arc::new(JsonFileStore::new(&path)));

    let response = router
        .oneshot(
            Request::post("/api/save-data")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "fullName": "Ali Hassan", "yearsOfWork": 4 }).to_string(),
                ))
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).expect("file written"))
        .expect("file parses");
    assert_eq!(raw["yearsOfWork"], "4");
    assert_eq!(raw["drivingLicense"], "No");
    assert_eq!(raw["education"].as_array().map(Vec::len), Some(1));
}
