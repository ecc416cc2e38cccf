//! # 문제(Question) 데이터베이스 쿼리 모듈
//!
//! `questions` 테이블에 대한 조회/검색/생성/삭제 쿼리와
//! 퀴즈용 무작위 추출 쿼리가 정의되어 있습니다.
//!
//! 모든 함수는 `async`이며 `SqlitePool`을 받아 데이터베이스와 상호작용합니다.
//! 에러 발생 시 `ApiError`를 반환합니다.
//!
//! 목록을 반환하는 쿼리는 전부 id 오름차순으로 정렬합니다.
//! 페이지네이션은 이 계층이 아니라 호출자(라우트 핸들러)가
//! `services::pagination`으로 수행합니다 — 전체 건수(total_questions)가
//! 응답에 함께 필요하기 때문입니다.

use crate::error::ApiError;
use crate::models::{NewQuestion, Question};
// SqlitePool: SQLite 연결 풀. 여러 비동기 작업이 동시에 DB에 접근할 수 있게 합니다.
// &SqlitePool로 받으면 소유권을 가져가지 않고 빌려서(borrow) 사용합니다.
use sqlx::SqlitePool;

/// 모든 문제를 id 오름차순으로 조회합니다.
///
/// # 매개변수
/// - `pool`: SQLite 연결 풀의 참조(&). 소유권을 가져가지 않고 빌려 씁니다.
///
/// # 반환값
/// - `Result<Vec<Question>, ApiError>`: 성공 시 문제 목록, 실패 시 에러
pub async fn list_questions(pool: &SqlitePool) -> Result<Vec<Question>, ApiError> {
    // sqlx::query_as::<_, Question>():
    //   SQL 쿼리를 실행하고 결과를 Question 구조체로 자동 변환합니다.
    //   Question에 #[derive(sqlx::FromRow)]가 있어서 자동 변환이 가능합니다.
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        ORDER BY id
        "#,
    )
    // .fetch_all(pool): 모든 결과 행을 가져옵니다 (Vec<Question> 반환)
    .fetch_all(pool)
    // ?: 에러 발생 시 ApiError로 자동 변환 후 함수에서 반환 (에러 전파)
    //    sqlx::Error → ApiError::Database 변환은 error.rs의 #[from]이 처리합니다.
    .await?;

    Ok(questions)
}

/// ID로 단일 문제를 조회합니다.
///
/// # 반환값
/// - `Ok(Some(Question))`: 문제를 찾은 경우
/// - `Ok(None)`: 해당 ID의 문제가 없는 경우
/// - `Err(ApiError)`: DB 에러 발생 시
pub async fn get_question(pool: &SqlitePool, id: i64) -> Result<Option<Question>, ApiError> {
    let question = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE id = ?
        "#,
        // ↑ SQL의 `?`는 파라미터 바인딩 자리표시자입니다.
        //   .bind()로 값을 안전하게 대입하며, SQL 인젝션을 방지합니다.
    )
    .bind(id)
    // .fetch_optional(): 결과가 0행이면 None, 1행이면 Some(Question)을 반환합니다.
    .fetch_optional(pool)
    .await?;

    Ok(question)
}

/// 문제 텍스트에 대한 대소문자 무시 부분 문자열 검색을 수행합니다.
///
/// 검색어는 `escape_like`로 이스케이프한 뒤 LIKE 패턴에 바인딩하므로
/// `%`, `_`, `\` 같은 문자가 들어와도 항상 "문자 그대로의 부분 문자열"로
/// 취급됩니다. 매칭이 없으면 빈 Vec을 반환합니다 (에러 아님).
pub async fn search_questions(pool: &SqlitePool, term: &str) -> Result<Vec<Question>, ApiError> {
    // LIKE는 SQLite에서 ASCII 대소문자를 무시하고 비교합니다.
    let pattern = format!("%{}%", escape_like(term));

    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE question LIKE ? ESCAPE '\'
        ORDER BY id
        "#,
    )
    .bind(pattern)
    .fetch_all(pool)
    .await?;

    Ok(questions)
}

/// 특정 카테고리의 문제를 id 오름차순으로 조회합니다.
///
/// 존재하지 않는 카테고리 id면 그냥 빈 Vec이 됩니다.
/// (빈 결과를 404로 바꾸는 것은 핸들러의 몫)
pub async fn list_questions_in_category(
    pool: &SqlitePool,
    category_id: i64,
) -> Result<Vec<Question>, ApiError> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE category = ?
        ORDER BY id
        "#,
    )
    .bind(category_id)
    .fetch_all(pool)
    .await?;

    Ok(questions)
}

/// 새 문제를 삽입하고, 생성된 행을 다시 조회하여 반환합니다.
///
/// id는 스토어가 생성합니다(AUTOINCREMENT). 외래 키/CHECK 제약 위반은
/// `ApiError::from_write_error`가 422(Unprocessable)로 분류합니다.
///
/// # 매개변수
/// - `new`: 검증을 마친 문제 생성 데이터
pub async fn insert_question(
    pool: &SqlitePool,
    new: &NewQuestion,
) -> Result<Question, ApiError> {
    // sqlx::query(): 결과를 구조체로 변환하지 않는 단순 실행 쿼리
    let result = sqlx::query(
        r#"
        INSERT INTO questions (question, answer, category, difficulty)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&new.question)
    .bind(&new.answer)
    .bind(new.category)
    .bind(new.difficulty)
    .execute(pool)
    .await
    // 제약 조건 위반(없는 카테고리, 범위 밖 난이도)은 클라이언트 잘못 → 422
    .map_err(ApiError::from_write_error)?;

    // .last_insert_rowid(): 방금 INSERT된 행의 id (SQLite가 부여)
    let id = result.last_insert_rowid();

    // 생성된 문제를 다시 조회하여 반환 (응답 본문의 created 필드가 됩니다)
    get_question(pool, id)
        .await?
        .ok_or(ApiError::Internal("Failed to retrieve created question".to_string()))
}

/// 문제를 삭제합니다.
///
/// # 반환값
/// - `Ok(true)`: 삭제 성공 (1행 이상 영향)
/// - `Ok(false)`: 해당 ID의 문제가 없음 (0행 영향)
pub async fn delete_question(pool: &SqlitePool, id: i64) -> Result<bool, ApiError> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    // .rows_affected(): 쿼리에 의해 영향받은 행 수를 반환합니다.
    Ok(result.rows_affected() > 0)
}

/// 출제 가능한 문제 중 하나를 균등 확률로 뽑습니다.
///
/// 출제 가능 집합 = (category_id가 0이 아니면 해당 카테고리의 문제)
///                - (exclude에 담긴, 이미 나온 문제 id들)
///
/// 무작위 선택은 스토어의 `ORDER BY RANDOM() LIMIT 1`에 위임합니다.
/// 집합이 비어 있으면 `Ok(None)`을 반환합니다 (퀴즈 종료 신호).
///
/// # 매개변수
/// - `category_id`: 카테고리 필터. 0이면 전체 카테고리에서 뽑습니다.
/// - `exclude`: 제외할 문제 id 목록 (빈 슬라이스 가능)
pub async fn random_question(
    pool: &SqlitePool,
    category_id: i64,
    exclude: &[i64],
) -> Result<Option<Question>, ApiError> {
    // ── 동적 쿼리 구성 ──
    // exclude 목록의 길이가 가변이므로 NOT IN (?, ?, ...)의 자리표시자 수를
    // 실행 시점에 만들어야 합니다. 값 자체는 전부 .bind()로 대입하므로
    // SQL 문자열에 사용자 입력이 섞이지 않습니다.
    let mut sql =
        String::from("SELECT id, question, answer, category, difficulty FROM questions");
    let mut clauses: Vec<String> = Vec::new();

    if category_id != 0 {
        clauses.push("category = ?".to_string());
    }
    if !exclude.is_empty() {
        let placeholders = vec!["?"; exclude.len()].join(", ");
        clauses.push(format!("id NOT IN ({placeholders})"));
    }
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY RANDOM() LIMIT 1");

    // ── 동적 쿼리 실행 ──
    // 자리표시자를 만든 순서 그대로 값을 바인딩합니다.
    let mut query = sqlx::query_as::<_, Question>(&sql);
    if category_id != 0 {
        query = query.bind(category_id);
    }
    for &id in exclude {
        query = query.bind(id);
    }

    let question = query.fetch_optional(pool).await?;
    Ok(question)
}

/// LIKE 패턴의 특수 문자를 이스케이프합니다.
///
/// LIKE에서 `%`는 "임의 길이 문자열", `_`는 "임의 문자 하나"를 의미하므로,
/// 검색어에 들어 있으면 사용자가 의도하지 않은 패턴 매칭이 됩니다.
/// 세 문자(`\`, `%`, `_`) 앞에 `\`를 붙이고, 쿼리에서 `ESCAPE '\'`로 해석합니다.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 일반 검색어는 그대로 통과해야 합니다.
    #[test]
    fn escape_like_passes_plain_terms_through() {
        assert_eq!(escape_like("title"), "title");
        assert_eq!(escape_like("What is"), "What is");
    }

    /// LIKE 와일드카드는 리터럴로 이스케이프되어야 합니다.
    #[test]
    fn escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like(r"back\slash"), r"back\\slash");
    }

    /// 특수 문자만으로 이루어진 검색어도 안전해야 합니다.
    #[test]
    fn escape_like_handles_wildcard_only_terms() {
        assert_eq!(escape_like("%%"), "\\%\\%");
        assert_eq!(escape_like("~!@"), "~!@"); // LIKE에서 의미 없는 문자는 그대로
    }
}
