use serde::{Deserialize, Serialize};

/// questions 테이블의 한 행. Serialize 구현이 곧 API 응답의 문제 표현입니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// `POST /questions` 요청 본문.
///
/// 이 엔드포인트는 `searchTerm` 필드를 판별자(discriminator)로 사용하는
/// 이중 용도 엔드포인트입니다: `searchTerm`이 있으면 검색, 없으면 생성.
/// 생성 필드는 핸들러에서 검증 후 `NewQuestion`으로 변환됩니다.
#[derive(Debug, Deserialize)]
pub struct QuestionsPostBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

/// 검증을 통과한 문제 생성 데이터 (INSERT에 바로 바인딩 가능)
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}
