use serde::{Deserialize, Serialize};

/// categories 테이블의 한 행.
///
/// `type`은 Rust 예약어라 필드명은 `kind`로 두고,
/// JSON과 컬럼 양쪽에서 "type"으로 매핑합니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}
