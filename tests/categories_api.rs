//! 카테고리 API 통합 테스트
//!
//! - `GET /api/v1.0/categories` 의 id→type 맵 형태
//! - `GET /api/v1.0/categories/{category_id}/questions` 의 성공/404 규약
//!   (이 핸들러의 실패는 전부 404입니다)

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::Value;

// ── 카테고리 목록 ──

/// 시드된 여섯 카테고리가 id→type 맵으로 반환된다.
#[tokio::test]
async fn test_list_categories_returns_seeded_map() {
    let app = spawn_app().await;

    let response = get(&app.router, "/api/v1.0/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["success"], Value::Bool(true));

    let categories = body["categories"]
        .as_object()
        .expect("categories must be a JSON object");
    assert_eq!(categories.len(), 6);
    // JSON 오브젝트 키는 항상 문자열이므로 id도 문자열 키로 나갑니다.
    assert_eq!(categories["1"], Value::from("Science"));
    assert_eq!(categories["6"], Value::from("Sports"));
}

/// 카테고리는 읽기 전용이므로 DELETE는 405로 거절된다.
#[tokio::test]
async fn test_categories_rejects_unsupported_method() {
    let app = spawn_app().await;

    let response = delete(&app.router, "/api/v1.0/categories").await;
    assert_error_body(response, StatusCode::METHOD_NOT_ALLOWED, "Not allowed").await;
}

// ── 카테고리별 문제 목록 ──

/// 해당 카테고리의 문제만, 전체 일치 수와 함께 반환된다.
#[tokio::test]
async fn test_questions_by_category_returns_only_that_category() {
    let app = spawn_seeded_app().await;

    let response = get(&app.router, "/api/v1.0/categories/1/questions").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(body["total_questions"], Value::from(5));
    assert_eq!(body["current_category"], Value::from(1));

    let questions = body["questions"].as_array().expect("questions array");
    assert_eq!(questions.len(), 5);
    for question in questions {
        assert_eq!(question["category"], Value::from(1));
    }
}

/// 존재하지 않는 카테고리 id는 404.
#[tokio::test]
async fn test_questions_by_category_unknown_id_is_404() {
    let app = spawn_seeded_app().await;

    let response = get(&app.router, "/api/v1.0/categories/999/questions").await;
    assert_error_body(response, StatusCode::NOT_FOUND, "Not found").await;
}

/// 숫자가 아닌 카테고리 id도 404. (422가 아니라는 점이 규약입니다)
#[tokio::test]
async fn test_questions_by_category_non_numeric_id_is_404() {
    let app = spawn_seeded_app().await;

    let response = get(&app.router, "/api/v1.0/categories/abc/questions").await;
    assert_error_body(response, StatusCode::NOT_FOUND, "Not found").await;
}

/// 존재하지만 문제가 없는 카테고리도 404. (없는 카테고리와 구분하지 않음)
#[tokio::test]
async fn test_questions_by_category_empty_category_is_404() {
    let app = spawn_seeded_app().await;

    // Sports(6)는 시드에 문제가 없습니다.
    let response = get(&app.router, "/api/v1.0/categories/6/questions").await;
    assert_error_body(response, StatusCode::NOT_FOUND, "Not found").await;
}

/// 범위를 벗어난 페이지도 404.
#[tokio::test]
async fn test_questions_by_category_page_past_end_is_404() {
    let app = spawn_seeded_app().await;

    let response = get(&app.router, "/api/v1.0/categories/1/questions?page=9").await;
    assert_error_body(response, StatusCode::NOT_FOUND, "Not found").await;
}
