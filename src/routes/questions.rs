//! # 문제(Question) 라우트 핸들러
//!
//! 문제 목록 조회, 생성/검색, 삭제를 처리하는 HTTP 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//! - `GET    /api/v1.0/questions`               → 문제 목록 조회 (페이지 단위)
//! - `POST   /api/v1.0/questions`               → 문제 생성 또는 검색 (본문으로 구분)
//! - `DELETE /api/v1.0/questions/{question_id}` → 문제 삭제
//!
//! ## Axum 핸들러 패턴
//! Axum 핸들러는 **Extractor(추출기)**를 매개변수로 받습니다.
//! Extractor는 HTTP 요청에서 데이터를 자동으로 추출합니다:
//! - `State(state)`: 앱 전역 상태 (DB 풀)
//! - `Query(params)`: URL 쿼리 스트링 (예: `?page=2`)
//! - `Path(id)`: URL 경로 파라미터 (예: `/questions/{question_id}`의 id)
//! - `Json(body)`: 요청 본문을 JSON으로 파싱하여 구조체로 변환
//!
//! Extractor를 `Result<Json<T>, JsonRejection>`처럼 Result로 감싸 받으면
//! 추출 실패가 Axum의 기본 응답 대신 핸들러 안으로 들어옵니다.
//! 깨진 본문이나 이상한 경로 파라미터에도 표준 에러 본문을 유지하기 위한
//! 패턴입니다.

use crate::{
    db,             // 데이터베이스 접근 계층
    error::ApiError,
    models::*,      // 데이터 모델 구조체들
    services,       // 페이지네이션 헬퍼
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection}, // Extractor 실패 사유 타입들
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value}; // JSON 값 생성 유틸리티
use sqlx::SqlitePool;          // SQLite 연결 풀 타입

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// SqlitePool은 내부적으로 Arc를 사용하므로 clone해도 연결 풀이 복제되지
/// 않고 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀
    pub pool: SqlitePool,
}

/// `?page=N` 쿼리 스트링
///
/// 페이지 값은 일부러 문자열로 받습니다. `?page=abc`처럼 숫자가 아닌 값이
/// 와도 요청을 거절하지 않고 1페이지로 해석하기 때문입니다
/// (`services::page_or_first` 참고).
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// 쿼리 스트링에서 페이지 번호를 해석합니다.
///
/// 쿼리 스트링 자체가 역직렬화되지 않는 경우(page 키 중복 등)까지 포함해,
/// 해석할 수 없는 page는 전부 1페이지로 간주합니다. 목록 요청이 쿼리
/// 스트링 때문에 거절당하는 일은 없습니다.
pub(crate) fn page_from_query(page_query: &Result<Query<PageQuery>, QueryRejection>) -> u32 {
    match page_query {
        Ok(Query(params)) => services::page_or_first(params.page.as_deref()),
        Err(_) => 1,
    }
}

/// `GET /questions` — 문제 목록을 페이지 단위로 조회합니다.
///
/// 전체 목록을 id 순으로 가져온 뒤 요청한 페이지(10개 단위)만 잘라
/// 반환합니다. `total_questions`는 현재 페이지 길이가 아니라 전체 문제
/// 수입니다. 프론트엔드가 페이지 버튼 개수를 계산하는 데 사용합니다.
///
/// # 반환값
/// `{ "success": true, "questions": [...], "total_questions": N,
///    "categories": { "1": "Science", ... }, "current_category": null }`
///
/// # 에러
/// 요청한 페이지에 문제가 하나도 없으면 404를 반환합니다.
pub async fn list_questions(
    State(state): State<AppState>,
    page_query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let page = page_from_query(&page_query);

    let questions = db::list_questions(&state.pool).await?;
    let current_page = services::paginate(&questions, page);
    // 범위를 벗어난 페이지는 "없는 자원"으로 취급합니다.
    if current_page.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = db::categories_map(&state.pool).await?;

    Ok(Json(json!({
        "success": true,
        "questions": current_page,
        "total_questions": questions.len(),
        "categories": categories,
        "current_category": null,
    })))
}

/// `POST /questions` — 문제를 생성하거나 검색합니다.
///
/// 하나의 엔드포인트가 두 동작을 겸합니다. 본문에 `searchTerm` 필드가
/// 있으면 검색, 없으면 생성으로 분기합니다.
///
/// # 검색 (`searchTerm` 있음)
/// 문제 텍스트에 대한 대소문자 무시 부분 일치 검색입니다. 결과는
/// `?page=` 파라미터로 페이지네이션됩니다. 일치하는 문제가 없어도 에러가
/// 아니라 빈 목록으로 200을 반환합니다. `%`, `_` 같은 LIKE 특수문자도
/// 문자 그대로 검색됩니다 (`db::search_questions`에서 이스케이프).
///
/// # 생성 (`searchTerm` 없음)
/// question/answer/category/difficulty 네 필드가 모두 있어야 하고,
/// 문자열 둘은 비어 있으면 안 됩니다. 위반 시 422.
/// 존재하지 않는 카테고리 id나 1~5 범위를 벗어난 난이도는 데이터베이스
/// 제약 위반으로 걸러져 역시 422가 됩니다.
///
/// # 에러
/// 본문이 JSON 구문 오류이거나 Content-Type이 틀리면 400,
/// 구조는 JSON이지만 필드 타입이 틀리면(예: category에 문자열) 422입니다.
pub async fn create_or_search_question(
    State(state): State<AppState>,
    page_query: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<QuestionsPostBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    // 구문 수준 실패(깨진 JSON, 잘못된 Content-Type)는 400으로,
    // 데이터 수준 실패(올바른 JSON이지만 타입 불일치)는 422로 구분합니다.
    let Json(body) = body.map_err(|rejection| match rejection {
        JsonRejection::JsonDataError(e) => ApiError::Unprocessable(e.to_string()),
        other => ApiError::BadRequest(other.to_string()),
    })?;

    // ── 검색 분기 ──
    if let Some(term) = body.search_term {
        let page = page_from_query(&page_query);

        let matches = db::search_questions(&state.pool, &term).await?;
        let current_page = services::paginate(&matches, page);

        return Ok(Json(json!({
            "success": true,
            "questions": current_page,
            "total_questions": matches.len(),
            "current_category": null,
        })));
    }

    // ── 생성 분기 ──
    // .filter(): Option 안의 값이 조건을 만족하지 않으면 None으로 만듭니다.
    // 빈 문자열 제목/답안을 "필드 없음"과 동일하게 취급하는 데 사용합니다.
    let new_question = match (
        body.question.filter(|q| !q.is_empty()),
        body.answer.filter(|a| !a.is_empty()),
        body.category,
        body.difficulty,
    ) {
        (Some(question), Some(answer), Some(category), Some(difficulty)) => NewQuestion {
            question,
            answer,
            category,
            difficulty,
        },
        _ => {
            return Err(ApiError::Unprocessable(
                "question, answer, category, difficulty are all required".to_string(),
            ))
        }
    };

    let created = db::insert_question(&state.pool, &new_question).await?;
    Ok(Json(json!({ "success": true, "created": created })))
}

/// `DELETE /questions/{question_id}` — 문제를 삭제합니다.
///
/// 경로의 id가 숫자로 해석되지 않으면 삭제를 시도조차 할 수 없으므로
/// 처리 불가(422)로, id는 유효하지만 해당 문제가 없으면 404로 답합니다.
pub async fn delete_question(
    State(state): State<AppState>,
    question_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(question_id) = question_id.map_err(|e| ApiError::Unprocessable(e.to_string()))?;

    let deleted = db::delete_question(&state.pool, question_id).await?;
    if !deleted {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({ "success": true, "deleted": question_id })))
}
