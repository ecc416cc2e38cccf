//! # Trivia API 서버 진입점
//!
//! 이 파일은 trivia-api 애플리케이션의 **시작점(entry point)**입니다.
//! Rust 프로그램은 항상 `main()` 함수에서 실행이 시작됩니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 데이터베이스 연결 풀 생성
//! 4. 데이터베이스 마이그레이션 실행 (스키마 + 카테고리 시드)
//! 5. API 라우터 조립
//! 6. HTTP 서버 시작
//!
//! 핸들러/모델/DB 계층은 라이브러리 크레이트(`trivia_api`)에 있습니다.
//! 통합 테스트가 서버를 띄우지 않고 라우터를 직접 구동할 수 있게 하기
//! 위한 분리입니다.

// ── 외부 크레이트 및 모듈에서 필요한 항목 가져오기 ──
use anyhow::Result; // anyhow::Result: 어떤 에러 타입이든 담을 수 있는 범용 Result 타입
use sqlx::sqlite::SqlitePoolOptions; // SQLite 연결 풀 설정 옵션
use std::path::Path; // 파일 경로를 다루는 표준 라이브러리 타입
use tower_http::{
    // tower-http: HTTP 미들웨어 모음 크레이트
    cors::{Any, CorsLayer},          // CORS(Cross-Origin Resource Sharing) 설정
    services::{ServeDir, ServeFile}, // 정적 파일 서빙 서비스
    trace::TraceLayer,               // HTTP 요청/응답 로깅 미들웨어
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt}; // 로깅 초기화 유틸리티
use trivia_api::{
    config::Config,
    routes::{self, AppState},
};

// #[tokio::main]: 비동기 런타임을 시작하는 어트리뷰트 매크로.
// async/await를 사용하려면 비동기 런타임(Tokio)이 필요하고,
// 이 매크로가 내부적으로 tokio 런타임을 생성해 main을 그 안에서 실행합니다.
#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일에서 환경변수를 읽어옵니다. (예: DATABASE_URL, PORT)
    // .ok()는 Result를 Option으로 변환하여, .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG 환경변수로 로그 레벨을 제어하고,
    // 환경변수가 없으면 기본값으로 debug 레벨을 사용합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trivia_api=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer()) // 로그를 터미널에 출력하는 포맷터 레이어
        .init(); // 전역 로거로 등록

    // ── 3단계: 설정 로딩 ──
    // `?` 연산자: Result가 Err이면 즉시 함수에서 반환(에러 전파)합니다.
    let config = Config::from_env()?;
    tracing::info!(
        "Starting trivia API server on {}:{}",
        config.host,
        config.port
    );

    // ── 4단계: SQLite 연결 풀 생성 ──
    // 연결 풀: 데이터베이스 연결을 미리 여러 개 만들어두고 재사용하는 패턴.
    let pool = SqlitePoolOptions::new()
        .max_connections(5) // 최대 5개의 동시 연결을 유지
        .connect(&config.database_url)
        .await?;

    // ── 5단계: 데이터베이스 마이그레이션 실행 ──
    // sqlx::migrate!는 컴파일 타임에 ./migrations 폴더의 SQL 파일들을
    // 바이너리에 포함시킵니다. 아직 적용되지 않은 것만 순서대로 실행되므로
    // 첫 구동 시 테이블 생성과 기본 카테고리 시드가 여기서 끝납니다.
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    // ── 6단계: 라우터 조립 ──
    // AppState: 모든 라우트 핸들러가 공유하는 상태 (연결 풀)
    let state = AppState { pool };
    let api = routes::api_router(state);

    // CORS: 개발 환경 기준으로 모든 출처/메서드/헤더를 허용합니다.
    // 프로덕션에서는 특정 도메인만 허용해야 합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 빌드된 프론트엔드가 있으면 같은 서버에서 서빙합니다.
    // SPA이므로 API에 매칭되지 않는 경로는 index.html로 돌려보냅니다.
    let frontend_build = Path::new("../frontend/build");
    let app = if frontend_build.exists() {
        tracing::info!("Serving frontend static files from ../frontend/build");

        let serve_dir = ServeDir::new("../frontend/build")
            .not_found_service(ServeFile::new("../frontend/build/index.html"));

        api.fallback_service(serve_dir)
            .layer(cors)
            .layer(TraceLayer::new_for_http()) // HTTP 요청/응답 자동 로깅
    } else {
        tracing::warn!("Frontend build directory not found, serving API only");

        // API만 서빙할 때도 접두사 밖의 경로가 표준 404 본문으로 답하게 합니다.
        api.fallback(routes::not_found)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    };

    // ── 7단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // axum::serve(): 서버를 시작하고 요청을 처리합니다.
    // 이 줄에서 서버가 영원히 실행됩니다 (Ctrl+C로 종료할 때까지).
    axum::serve(listener, app).await?;

    Ok(())
}
