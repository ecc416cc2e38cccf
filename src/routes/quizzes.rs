//! # 퀴즈(Quiz) 라우트 핸들러
//!
//! 퀴즈 게임의 출제 로직입니다. 클라이언트가 지금까지 나온 문제 id 목록을
//! 보내면, 아직 나오지 않은 문제 중 하나를 무작위로 골라 돌려줍니다.
//!
//! ## 엔드포인트
//! - `POST /api/v1.0/quizzes` → 다음 퀴즈 문제 출제

use crate::routes::questions::AppState;
use crate::{db, error::ApiError, models::*};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};

/// `POST /quizzes` — 아직 출제되지 않은 문제 하나를 무작위로 뽑습니다.
///
/// 요청 본문:
/// `{ "previous_questions": [id, ...], "quiz_category": { "id": N } }`
/// - `quiz_category.id`가 0이면 전체 카테고리에서 출제합니다.
/// - `previous_questions`에 포함된 문제는 다시 출제되지 않습니다.
///   필드를 생략하면 빈 목록으로 간주합니다.
///
/// 출제할 문제가 남아 있지 않으면 200과 함께 `question: null`을
/// 반환합니다. 프론트엔드는 이것을 퀴즈 종료 신호로 사용합니다.
/// 존재하지 않는 카테고리 id도 같은 이유로 `question: null`이 됩니다.
///
/// # 에러
/// 본문이 없거나 깨졌거나 `quiz_category`가 빠지는 등 어떤 이유로든
/// 역직렬화에 실패하면 422입니다.
pub async fn quiz_question(
    State(state): State<AppState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::Unprocessable(e.to_string()))?;

    let question =
        db::random_question(&state.pool, req.quiz_category.id, &req.previous_questions).await?;

    // Option<Question>은 Some이면 객체로, None이면 null로 직렬화됩니다.
    Ok(Json(json!({ "success": true, "question": question })))
}
