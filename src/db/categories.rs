//! # 카테고리(Category) 데이터베이스 쿼리 모듈
//!
//! `categories` 테이블은 이 시스템 관점에서 읽기 전용입니다.
//! (생성/삭제 엔드포인트가 없고, 행은 시드 마이그레이션으로 들어옵니다.)

use crate::error::ApiError;
use crate::models::Category;
use sqlx::SqlitePool;
use std::collections::BTreeMap;

/// 모든 카테고리를 id 오름차순으로 조회합니다.
pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<Category>, ApiError> {
    let categories = sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type
        FROM categories
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(categories)
}

/// 모든 카테고리를 {id: type} 매핑으로 조회합니다.
///
/// `GET /categories`와 `GET /questions` 두 응답이 공유하는 형태입니다.
/// BTreeMap이라 JSON 직렬화 시 키가 id 순서로 나옵니다.
/// (JSON 객체의 키는 문자열이므로 id는 "1", "2", ...로 직렬화됩니다.)
pub async fn categories_map(pool: &SqlitePool) -> Result<BTreeMap<i64, String>, ApiError> {
    let categories = list_categories(pool).await?;
    Ok(categories.into_iter().map(|c| (c.id, c.kind)).collect())
}
