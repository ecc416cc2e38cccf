//! # 트리비아 문제 은행 API 라이브러리
//!
//! 상식 퀴즈 문제 은행을 HTTP로 노출하는 웹 백엔드입니다.
//! 모든 엔드포인트는 `/api/v1.0` 접두사 아래에 있으며 JSON으로 통신합니다.
//!
//! 제공 기능:
//! - 카테고리 목록 조회
//! - 문제 목록 조회 (10건 단위 페이지네이션)
//! - 문제 생성 / 삭제 / 부분 문자열 검색
//! - 카테고리별 문제 조회
//! - 퀴즈 출제 (이미 나온 문제를 제외한 무작위 한 문제)
//!
//! 바이너리 진입점(main.rs)과 통합 테스트(tests/)가 같은 라우터를 쓸 수 있도록
//! 모듈을 라이브러리로 노출합니다.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
