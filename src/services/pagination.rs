//! # 페이지네이션 헬퍼
//!
//! 목록 엔드포인트(`GET /questions`, 검색, 카테고리별 조회)는 모두
//! "전체 결과를 id 순으로 가져온 뒤 10건 단위로 자르는" 같은 방식을 씁니다.
//! 이 모듈은 그 자르기 연산과 페이지 번호 해석을 담당합니다.
//!
//! 페이지 번호는 1부터 시작하며, 페이지 N은 구간 [(N-1)*10, N*10)을 의미합니다.
//! 데이터 범위를 넘어서는 페이지는 에러가 아니라 빈 목록이 됩니다.
//! (빈 페이지를 404로 볼지 200으로 볼지는 호출하는 핸들러가 결정합니다.)

/// 페이지당 문제 수
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 정렬된 슬라이스에서 `page`(1부터 시작)에 해당하는 창을 복제해 반환합니다.
///
/// # 매개변수
/// - `items`: 이미 정렬된 전체 결과
/// - `page`: 1-기반 페이지 번호. 0은 1과 동일하게 처리합니다.
///
/// # 반환값
/// 해당 창의 항목들. 범위를 벗어나면 빈 Vec.
pub fn paginate<T: Clone>(items: &[T], page: u32) -> Vec<T> {
    // saturating_sub: 0 - 1이 언더플로로 패닉하지 않고 0에 머물게 합니다.
    let start = page.saturating_sub(1) as usize * QUESTIONS_PER_PAGE;

    // .skip()/.take() 조합은 start가 길이를 넘어도 안전하게 빈 이터레이터가 됩니다.
    // (슬라이스 인덱싱 items[start..end]는 범위를 넘으면 패닉)
    items
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}

/// 쿼리 문자열의 `page` 값을 페이지 번호로 해석합니다.
///
/// 값이 없거나 숫자로 읽을 수 없으면 1페이지로 간주합니다.
/// (음수는 u32 파싱에 실패하므로 역시 1페이지가 됩니다.)
pub fn page_or_first(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.parse::<u32>().ok())
        .map(|page| page.max(1))
        .unwrap_or(1)
}
