mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;
use sqlx::PgPool;

use minaret_api::background::NotificationDispatcher;

use common::{
    admin_token, body_json, build_test_app, get, get_auth, post_json, post_json_auth, user_token,
};

fn notification_body(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "message": "Jumu'ah prayer starts at 12:30 today.",
        "type": "prayer_reminder",
        "target_audience": "all"
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_requires_admin(pool: PgPool) {
    let user = user_token(pool.clone()).await;
    let app = build_test_app(pool);

    let unauthenticated = post_json(
        app.clone(),
        "/notifications",
        notification_body("Friday reminder"),
    )
    .await;
    assert_eq!(unauthenticated.status(), StatusCode::UNAUTHORIZED);

    let as_user = post_json_auth(
        app,
        "/notifications",
        notification_body("Friday reminder"),
        &user,
    )
    .await;
    assert_eq!(as_user.status(), StatusCode::FORBIDDEN);
    let body = body_json(as_user).await;
    assert_eq!(body["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_applies_defaults_and_starts_unsent(pool: PgPool) {
    let admin = admin_token(pool.clone()).await;
    let app = build_test_app(pool);

    // Only title and message given; kind and audience take their defaults.
    let response = post_json_auth(
        app,
        "/notifications",
        json!({ "title": "Welcome", "message": "Assalamu alaikum!" }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    let notification = &body["data"];
    assert_eq!(notification["type"], "general");
    assert_eq!(notification["target_audience"], "all");
    assert_eq!(notification["target_users"], json!([]));
    assert_eq!(notification["sent"], false);
    assert!(notification["sent_at"].is_null());
    assert_eq!(notification["created_by"], 1);
    assert!(notification["scheduled_for"].as_str().is_some());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_invalid_enum_values(pool: PgPool) {
    let admin = admin_token(pool.clone()).await;
    let app = build_test_app(pool);

    let bad_kind = post_json_auth(
        app.clone(),
        "/notifications",
        json!({ "title": "T", "message": "M", "type": "broadcast" }),
        &admin,
    )
    .await;
    assert_eq!(bad_kind.status(), StatusCode::BAD_REQUEST);
    let body = body_json(bad_kind).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let bad_audience = post_json_auth(
        app,
        "/notifications",
        json!({ "title": "T", "message": "M", "target_audience": "everyone" }),
        &admin,
    )
    .await;
    assert_eq!(bad_audience.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_specific_audience_requires_targets(pool: PgPool) {
    let admin = admin_token(pool.clone()).await;
    let app = build_test_app(pool);

    let no_targets = post_json_auth(
        app.clone(),
        "/notifications",
        json!({ "title": "T", "message": "M", "target_audience": "specific" }),
        &admin,
    )
    .await;
    assert_eq!(no_targets.status(), StatusCode::BAD_REQUEST);

    let with_targets = post_json_auth(
        app.clone(),
        "/notifications",
        json!({
            "title": "T",
            "message": "M",
            "target_audience": "specific",
            "target_users": [2]
        }),
        &admin,
    )
    .await;
    assert_eq!(with_targets.status(), StatusCode::CREATED);

    // Conversely, a broad audience must not carry a target list.
    let all_with_targets = post_json_auth(
        app,
        "/notifications",
        json!({
            "title": "T",
            "message": "M",
            "target_audience": "all",
            "target_users": [2]
        }),
        &admin,
    )
    .await;
    assert_eq!(all_with_targets.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_filters_and_rejects_bad_filter_values(pool: PgPool) {
    let admin = admin_token(pool.clone()).await;
    let app = build_test_app(pool);

    let created = post_json_auth(
        app.clone(),
        "/notifications",
        notification_body("Friday reminder"),
        &admin,
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    // Listing is admin-only.
    let unauthenticated = get(app.clone(), "/notifications").await;
    assert_eq!(unauthenticated.status(), StatusCode::UNAUTHORIZED);

    let matching = get_auth(
        app.clone(),
        "/notifications?type=prayer_reminder&sent=false",
        &admin,
    )
    .await;
    assert_eq!(matching.status(), StatusCode::OK);
    let body = body_json(matching).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    let non_matching = get_auth(app.clone(), "/notifications?type=event", &admin).await;
    let body = body_json(non_matching).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));

    // A typo in a filter value is a 400, not an empty result.
    let bad_filter = get_auth(app, "/notifications?type=reminder", &admin).await;
    assert_eq!(bad_filter.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_unknown_notification_is_404(pool: PgPool) {
    let admin = admin_token(pool.clone()).await;
    let app = build_test_app(pool);

    let response = get_auth(app, "/notifications/9999", &admin).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_dispatcher_sends_due_notifications_exactly_once(pool: PgPool) {
    let admin = admin_token(pool.clone()).await;
    let app = build_test_app(pool.clone());

    // One notification already due, one scheduled for the future.
    let due = post_json_auth(
        app.clone(),
        "/notifications",
        json!({
            "title": "Due now",
            "message": "This one should go out.",
            "scheduled_for": (Utc::now() - Duration::minutes(5)).to_rfc3339()
        }),
        &admin,
    )
    .await;
    assert_eq!(due.status(), StatusCode::CREATED);
    let due_id = body_json(due).await["data"]["id"]
        .as_i64()
        .expect("created notification id");

    let future = post_json_auth(
        app.clone(),
        "/notifications",
        json!({
            "title": "Not yet",
            "message": "This one waits.",
            "scheduled_for": (Utc::now() + Duration::hours(1)).to_rfc3339()
        }),
        &admin,
    )
    .await;
    assert_eq!(future.status(), StatusCode::CREATED);

    let dispatcher = NotificationDispatcher::new(pool);
    let dispatched = dispatcher.dispatch_due().await.expect("dispatch should succeed");
    assert_eq!(dispatched, 1);

    // The due notification is now sent, with a delivery timestamp.
    let response = get_auth(app, &format!("/notifications/{due_id}"), &admin).await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["sent"], true);
    assert!(body["data"]["sent_at"].as_str().is_some());

    // A second pass finds nothing to do.
    let dispatched_again = dispatcher.dispatch_due().await.expect("dispatch should succeed");
    assert_eq!(dispatched_again, 0);
}
