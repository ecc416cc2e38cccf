//! # 서비스(비즈니스 로직) 모듈
//!
//! HTTP·DB 계층에 속하지 않는 순수 로직을 모아둔 모듈입니다.
//! - `pagination`: 정렬된 결과 집합을 10건 단위 페이지로 자르는 헬퍼

pub mod pagination;

pub use pagination::*;
