//! Handler tests for the space events domain, run against the in-memory
//! repository.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use domain_space_events::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

const DEFAULT_PHOTO: &str = "MA=="; // b"0"
const UPDATED_PHOTO: &str = "MQ=="; // b"1"

fn app() -> Router {
    handlers::router(
        SpaceEventService::new(InMemorySpaceEventRepository::new()),
        "spaceApp",
    )
}

fn default_event() -> Value {
    json!({
        "name": "AAAAAAAAAA",
        "date": "1970-01-01",
        "description": "AAAAAAAAAA",
        "photo": DEFAULT_PHOTO,
        "photoContentType": "image/jpg",
        "type": "LAUNCH"
    })
}

fn send(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn total_count(app: &Router) -> u64 {
    let response = app.clone().oneshot(send("GET", "/", None)).await.unwrap();
    response.headers()["x-total-count"]
        .to_str()
        .unwrap()
        .parse()
        .unwrap()
}

#[tokio::test]
async fn full_lifecycle() {
    let app = app();

    // create
    let response = app
        .clone()
        .oneshot(send("POST", "/", Some(default_event())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/api/space-events/1");
    assert_eq!(
        response.headers()["x-spaceapp-alert"],
        "spaceApp.spaceEvent.created"
    );
    let created = json_body(response.into_body()).await;
    let id = created["id"].as_i64().unwrap();
    let mut expected = default_event();
    expected["id"] = json!(id);
    assert_eq!(created, expected);

    // list, newest first
    let response = app
        .clone()
        .oneshot(send("GET", "/?sort=id,desc", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = json_body(response.into_body()).await;
    assert_eq!(listed[0], expected);

    // get
    let response = app
        .clone()
        .oneshot(send("GET", &format!("/{id}"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await, expected);

    // update
    let updated = json!({
        "id": id,
        "name": "BBBBBBBBBB",
        "date": "2026-10-18",
        "description": "BBBBBBBBBB",
        "photo": UPDATED_PHOTO,
        "photoContentType": "image/png",
        "type": "LANDING"
    });
    let response = app
        .clone()
        .oneshot(send("PUT", "/", Some(updated.clone())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["x-spaceapp-alert"],
        "spaceApp.spaceEvent.updated"
    );
    assert_eq!(response.headers()["x-spaceapp-params"], id.to_string());
    assert_eq!(json_body(response.into_body()).await, updated);
    assert_eq!(total_count(&app).await, 1);

    // delete
    let response = app
        .clone()
        .oneshot(send("DELETE", &format!("/{id}"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        response.headers()["x-spaceapp-alert"],
        "spaceApp.spaceEvent.deleted"
    );
    assert_eq!(total_count(&app).await, 0);
}

#[tokio::test]
async fn create_with_existing_id_is_rejected() {
    let app = app();
    let mut body = default_event();
    body["id"] = json!(1);

    let response = app
        .clone()
        .oneshot(send("POST", "/", Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = json_body(response.into_body()).await;
    assert_eq!(error["message"], "A new spaceEvent cannot already have an ID");
    assert_eq!(error["details"]["errorKey"], "idexists");
    assert_eq!(total_count(&app).await, 0);
}

#[tokio::test]
async fn required_fields_are_checked() {
    for field in ["name", "date", "type"] {
        let app = app();
        let mut body = default_event();
        body[field] = Value::Null;

        let response = app
            .clone()
            .oneshot(send("POST", "/", Some(body)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{field}");
        let error = json_body(response.into_body()).await;
        assert_eq!(error["error"], "VALIDATION_ERROR", "{field}");
        assert_eq!(total_count(&app).await, 0, "{field}");
    }
}

#[tokio::test]
async fn unknown_type_is_a_bad_request() {
    let mut body = default_event();
    body["type"] = json!("DOCKING");

    let response = app()
        .oneshot(send("POST", "/", Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response.into_body()).await["error"], "INVALID_JSON");
}

#[tokio::test]
async fn update_without_id_is_rejected() {
    let response = app()
        .oneshot(send("PUT", "/", Some(default_event())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response.into_body()).await["details"]["errorKey"],
        "idnull"
    );
}

#[tokio::test]
async fn update_of_unknown_id_creates_a_new_event() {
    let app = app();
    let mut body = default_event();
    body["id"] = json!(77);

    let response = app
        .clone()
        .oneshot(send("PUT", "/", Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await["id"], 1);
    assert_eq!(total_count(&app).await, 1);
}

#[tokio::test]
async fn get_missing_event_is_404() {
    let response = app()
        .oneshot(send("GET", "/9999", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_sorts_by_type_alias() {
    let app = app();
    for kind in ["LANDING", "LAUNCH", "LANDING"] {
        let mut body = default_event();
        body["type"] = json!(kind);
        app.clone()
            .oneshot(send("POST", "/", Some(body)))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(send("GET", "/?sort=type,asc&size=10", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let listed = json_body(response.into_body()).await;
    let ids: Vec<i64> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [2, 1, 3]);
}

#[tokio::test]
async fn empty_list_still_links_first_and_last() {
    let response = app().oneshot(send("GET", "/?size=5", None)).await.unwrap();

    assert_eq!(response.headers()["x-total-count"], "0");
    assert_eq!(
        response.headers()[header::LINK],
        r#"</?page=0&size=5>; rel="last",</?page=0&size=5>; rel="first""#
    );
    assert_eq!(json_body(response.into_body()).await, json!([]));
}

#[tokio::test]
async fn huge_page_index_is_an_empty_page() {
    let app = app();
    app.clone()
        .oneshot(send("POST", "/", Some(default_event())))
        .await
        .unwrap();

    let response = app
        .oneshot(send("GET", "/?page=18446744073709551615&size=20&sort=date,desc", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-total-count"], "1");
    let link = response.headers()[header::LINK].to_str().unwrap().to_string();
    assert!(!link.contains("rel=\"next\""));
    assert!(link.contains("page=0&size=20>; rel=\"first\""));
    assert_eq!(json_body(response.into_body()).await, json!([]));
}

#[tokio::test]
async fn negative_size_uses_the_default() {
    let app = app();
    app.clone()
        .oneshot(send("POST", "/", Some(default_event())))
        .await
        .unwrap();

    let response = app.oneshot(send("GET", "/?size=-1", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let link = response.headers()[header::LINK].to_str().unwrap().to_string();
    assert!(link.contains("size=20>; rel=\"last\""));
    assert_eq!(json_body(response.into_body()).await.as_array().unwrap().len(), 1);
}
