//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `ApiError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 표준 JSON 에러 응답으로 자동 변환
//!
//! ## 표준 에러 응답 형식
//! 모든 에러는 아래 형태의 본문으로 클라이언트에 전달됩니다:
//! ```json
//! { "success": false, "error": 404, "message": "Not found" }
//! ```
//! message는 상태 코드별 고정 문자열입니다. 에러의 상세 내용(쿼리 실패 원인 등)은
//! 서버 로그에만 기록하고 클라이언트에는 노출하지 않습니다.

use axum::{
    http::StatusCode,                   // HTTP 상태 코드 (200, 404, 500 등)
    response::{IntoResponse, Response}, // Axum의 응답 변환 트레이트
    Json,                               // JSON 응답 래퍼
};
use serde_json::json; // json! 매크로: JSON 객체를 간편하게 생성
use sqlx::error::ErrorKind; // 데이터베이스 에러의 세부 종류 (제약 조건 위반 등)
use thiserror::Error; // thiserror: 커스텀 에러 타입을 쉽게 만들어주는 매크로 크레이트

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 각 variant는 요청 처리 중의 실패 분류 하나에 대응하며,
/// 핸들러에서 `Result<T, ApiError>`를 반환하면
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 잘못된 요청 (HTTP 400) — 파싱 불가능한 본문 등
    /// String은 로그용 상세 메시지이며 클라이언트에는 노출되지 않습니다.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// 요청한 리소스 없음 / 빈 결과 (HTTP 404)
    #[error("resource not found")]
    NotFound,

    /// 경로는 있으나 HTTP 메서드가 허용되지 않음 (HTTP 405)
    #[error("method not allowed")]
    MethodNotAllowed,

    /// 처리할 수 없는 요청 (HTTP 422) — 필수 필드 누락, 제약 조건 위반 등
    #[error("unprocessable: {0}")]
    Unprocessable(String),

    /// 데이터베이스 오류 (HTTP 500)
    /// #[from]: sqlx::Error를 ApiError로 자동 변환하는 From 트레이트를 구현합니다.
    /// 이를 통해 sqlx 함수 호출에 `?` 연산자를 쓰면 자동으로 이 variant가 됩니다.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 서버 내부 오류 (HTTP 500)
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// 쓰기 쿼리(INSERT 등)의 실패를 분류합니다.
    ///
    /// 외래 키 위반(존재하지 않는 카테고리), CHECK 위반(난이도 범위 초과),
    /// NOT NULL 위반은 클라이언트가 보낸 데이터의 문제이므로 422로 내립니다.
    /// 그 외의 실패(연결 끊김 등)는 그대로 데이터베이스 오류(500)로 둡니다.
    pub fn from_write_error(e: sqlx::Error) -> Self {
        // .as_database_error(): sqlx::Error에서 DB 엔진이 보고한 에러만 꺼냅니다.
        // (풀 타임아웃, 디코딩 실패 등 드라이버 측 에러면 None)
        let constraint = e
            .as_database_error()
            .map(|db_err| {
                matches!(
                    db_err.kind(),
                    ErrorKind::ForeignKeyViolation
                        | ErrorKind::CheckViolation
                        | ErrorKind::NotNullViolation
                )
            })
            .unwrap_or(false);

        if constraint {
            ApiError::Unprocessable(format!("constraint violation: {e}"))
        } else {
            ApiError::Database(e)
        }
    }
}

impl IntoResponse for ApiError {
    /// ApiError를 HTTP 응답으로 변환합니다.
    ///
    /// 각 에러 종류를 상태 코드와 고정 메시지로 매핑하고,
    /// 5xx 계열은 실제 원인을 로그에 남깁니다.
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(ref detail) => {
                tracing::debug!("bad request: {}", detail);
                (StatusCode::BAD_REQUEST, "Bad request")
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Not allowed"),
            ApiError::Unprocessable(ref detail) => {
                tracing::debug!("unprocessable request: {}", detail);
                (StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable resource")
            }
            ApiError::Database(ref e) => {
                // 저장소 장애는 클라이언트 실수와 구분되는 5xx 경로로 보냅니다.
                tracing::error!("database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error")
            }
            ApiError::Internal(ref detail) => {
                tracing::error!("internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error")
            }
        };

        // 표준 에러 본문: { "success": false, "error": <code>, "message": <text> }
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        }));

        (status, body).into_response()
    }
}
