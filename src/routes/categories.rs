//! # 카테고리(Category) 라우트 핸들러
//!
//! 카테고리는 읽기 전용 자원입니다. 생성/수정/삭제 엔드포인트가 없고,
//! 마이그레이션이 심어둔 시드 데이터가 곧 전체 목록입니다.
//!
//! ## 엔드포인트
//! - `GET /api/v1.0/categories`                         → 카테고리 전체 조회
//! - `GET /api/v1.0/categories/{category_id}/questions` → 카테고리별 문제 조회

use crate::routes::questions::{page_from_query, AppState, PageQuery};
use crate::{db, error::ApiError, services};
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde_json::{json, Value};

/// `GET /categories` — 카테고리 전체를 `{id: type}` 맵으로 반환합니다.
///
/// # 반환값
/// `{ "success": true, "categories": { "1": "Science", "2": "Art", ... } }`
/// (JSON 오브젝트 키는 항상 문자열이므로 id도 문자열로 나갑니다)
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let categories = db::categories_map(&state.pool).await?;
    Ok(Json(json!({ "success": true, "categories": categories })))
}

/// `GET /categories/{category_id}/questions` — 한 카테고리의 문제 목록입니다.
///
/// 이 핸들러의 실패는 전부 404입니다. 숫자가 아닌 경로 id도, 존재하지
/// 않는 카테고리도, 범위를 벗어난 페이지도 모두 "해당하는 문제 없음"으로
/// 답합니다. 존재하지만 비어 있는 카테고리와 존재하지 않는 카테고리를
/// 구분하지 않는다는 뜻입니다.
pub async fn list_questions_in_category(
    State(state): State<AppState>,
    category_id: Result<Path<i64>, PathRejection>,
    page_query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(category_id) = category_id.map_err(|_| ApiError::NotFound)?;
    let page = page_from_query(&page_query);

    let questions = db::list_questions_in_category(&state.pool, category_id).await?;
    let current_page = services::paginate(&questions, page);
    if current_page.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "questions": current_page,
        "total_questions": questions.len(),
        "current_category": category_id,
    })))
}
