//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우터 조립을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `categories`: 카테고리 조회, 카테고리별 문제 조회 핸들러
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `questions`: 문제 목록/생성/검색/삭제 핸들러
//! - `quizzes`: 퀴즈 출제 핸들러

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

// 각 모듈의 핸들러 함수들을 재공개하여
// `routes::list_questions`처럼 바로 접근 가능하게 합니다.
pub use categories::*;
pub use health::*;
pub use questions::*;
pub use quizzes::*;

use crate::error::ApiError;
use axum::{
    routing::{delete, get, post},
    Router,
};

/// API 라우터를 조립합니다.
///
/// 모든 엔드포인트는 `/api/v1.0` 접두사 아래에 중첩됩니다.
/// main은 이 라우터 위에 CORS/트레이싱 레이어를 얹고,
/// 통합 테스트는 이 함수를 그대로 호출해 라우터를 얻습니다.
pub fn api_router(state: AppState) -> Router {
    // 접두사 안쪽 라우터입니다. 폴백 두 개가 에러 응답 규약을 지켜줍니다:
    // 등록되지 않은 경로는 404, 경로는 맞지만 메서드가 다르면 405.
    // 폴백이 없으면 Axum 기본 응답(빈 본문)이 나가서 규약이 깨집니다.
    let api = Router::new()
        .route("/categories", get(list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(list_questions_in_category),
        )
        // 같은 경로에 .get().post()를 체이닝하면 메서드별 핸들러가 매핑됩니다.
        .route(
            "/questions",
            get(list_questions).post(create_or_search_question),
        )
        .route("/questions/{question_id}", delete(delete_question))
        .route("/quizzes", post(quiz_question))
        .route("/health", get(health_check))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        // .with_state(): 이 라우터의 모든 핸들러에서 AppState를 사용할 수 있게 합니다.
        .with_state(state);

    Router::new().nest("/api/v1.0", api)
}

/// 등록되지 않은 경로에 대한 폴백 → 404 표준 본문
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// 등록된 경로의 지원하지 않는 메서드에 대한 폴백 → 405 표준 본문
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
