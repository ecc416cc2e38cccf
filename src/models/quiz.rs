use serde::Deserialize;

/// `POST /quizzes` 요청 본문.
///
/// `previous_questions`는 클라이언트가 누적해 보내는 "이미 나온 문제 id" 목록이고
/// 생략 가능합니다(기본값 빈 목록). `quiz_category`는 필수입니다.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

/// 퀴즈 카테고리 선택자. id 0은 "전체 카테고리" 센티널입니다.
///
/// 프런트엔드는 카테고리 객체 전체({id, type})를 보내므로
/// id 외의 필드는 무시됩니다.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
}
