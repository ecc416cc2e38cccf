//! 통합 테스트 공용 헬퍼
//!
//! 각 테스트는 임시 디렉토리 안의 독립된 SQLite 파일을 사용합니다.
//! 마이그레이션(스키마 + 카테고리 시드)을 실행한 뒤 실제 서비스와 동일한
//! 라우터를 조립하고, 서버를 띄우는 대신 `tower::ServiceExt::oneshot`으로
//! 요청을 하나씩 흘려보냅니다.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tempfile::TempDir;
use tower::ServiceExt; // Router를 서버 없이 구동하는 oneshot() 제공
use trivia_api::{
    db,
    models::NewQuestion,
    routes::{api_router, AppState},
};

/// 테스트 하나가 사용하는 격리된 앱 인스턴스.
///
/// `TempDir`는 드롭될 때 디렉토리를 지우므로 테스트가 끝나면
/// DB 파일도 함께 사라집니다.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    _dir: TempDir, // DB 파일 수명 유지용
}

/// 마이그레이션만 적용된, 문제가 하나도 없는 앱을 만듭니다.
/// (카테고리 여섯 개는 마이그레이션 시드로 이미 들어 있습니다)
pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let options = SqliteConnectOptions::new()
        .filename(dir.path().join("trivia-test.db"))
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("failed to open test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let router = api_router(AppState { pool: pool.clone() });

    TestApp {
        router,
        pool,
        _dir: dir,
    }
}

/// 기본 문제 묶음: (question, answer, category, difficulty)
///
/// 새 DB에 순서대로 넣으므로 id는 1부터 14까지 고정됩니다.
/// 의도된 배치:
/// - 총 14문제 → 목록 1페이지 10개, 2페이지 4개
/// - Science(1) 5문제, 그중 id 4/5만 "planet"을 포함 (검색 테스트용)
/// - Geography(3) 2문제 (id 10/11, 퀴즈 소진 테스트용)
/// - Sports(6) 0문제 (빈 카테고리 테스트용)
const FIXTURE_QUESTIONS: [(&str, &str, i64, i64); 14] = [
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which planet is known as the Red Planet?", "Mars", 1, 1),
    ("Which planet has the most moons?", "Saturn", 1, 3),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("Which Dutch graphic artist was a creator of optical illusions?", "Escher", 2, 2),
    ("In which museum is the Mona Lisa displayed?", "The Louvre", 2, 2),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
];

/// 기본 문제 묶음 14개가 들어 있는 앱을 만듭니다.
pub async fn spawn_seeded_app() -> TestApp {
    let app = spawn_app().await;
    for (question, answer, category, difficulty) in FIXTURE_QUESTIONS {
        let new_question = NewQuestion {
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty,
        };
        db::insert_question(&app.pool, &new_question)
            .await
            .expect("failed to seed question");
    }
    app
}

/// 본문 없는 요청을 보냅니다. (메서드 매트릭스 테스트용)
pub async fn send(router: &Router, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    router.clone().oneshot(request).await.expect("request failed")
}

/// GET 요청을 보냅니다.
pub async fn get(router: &Router, uri: &str) -> Response {
    send(router, Method::GET, uri).await
}

/// DELETE 요청을 보냅니다.
pub async fn delete(router: &Router, uri: &str) -> Response {
    send(router, Method::DELETE, uri).await
}

/// JSON 본문과 함께 POST 요청을 보냅니다.
pub async fn post_json(router: &Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    router.clone().oneshot(request).await.expect("request failed")
}

/// 원시 본문으로 POST 요청을 보냅니다. (깨진 본문/헤더 테스트용)
pub async fn post_raw(
    router: &Router,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> Response {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    router.clone().oneshot(request).await.expect("request failed")
}

/// 응답 본문을 JSON으로 파싱합니다.
pub async fn response_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not valid JSON")
}

/// 표준 에러 본문 `{success: false, error, message}`를 검증합니다.
pub async fn assert_error_body(response: Response, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    let body = response_json(response).await;
    assert_eq!(body["success"], Value::Bool(false));
    assert_eq!(body["error"], Value::from(status.as_u16()));
    assert_eq!(body["message"], Value::from(message));
}
