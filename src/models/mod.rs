//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! 각 하위 모듈은 특정 도메인의 데이터 타입을 담당합니다:
//! - `question`: 문제(Question) 행과 문제 생성/검색 요청 구조체
//! - `category`: 카테고리(Category) 행 구조체
//! - `quiz`: 퀴즈 출제 요청 구조체
//!
//! `pub use X::*;`는 하위 모듈의 모든 공개 항목을
//! 이 모듈에서 바로 접근할 수 있게 재공개(re-export)합니다.
//! 예: `crate::models::question::Question` 대신 `crate::models::Question`로 접근 가능

pub mod category;
pub mod question;
pub mod quiz;

pub use category::*;
pub use question::*;
pub use quiz::*;
