//! HTTP contract tests
//!
//! Each test binds the real router to an ephemeral port and drives it with a
//! plain HTTP client, asserting the wire-level contract: envelope shape,
//! camelCase keys, validation-as-200, and generic failure responses.

use async_trait::async_trait;
use folio::{
    AppState, ArticleRecord, CaseStudyRecord, ContentKind, ContentRecord, ContentRepository,
    HistoryRecord, MemoryContentStore, PortfolioRecord, SearchOrchestrator,
};
use std::sync::Arc;
use std::time::Duration;

fn seeded_orchestrator() -> SearchOrchestrator {
    let articles = MemoryContentStore::new(ContentKind::Article);
    articles
        .insert(
            ArticleRecord::new(
                "a1",
                "How AI is Transforming Marketing",
                "marketing teams adopt ai; modern marketing stacks",
            )
            .with_slug("ai-marketing")
            .with_category("AI & Marketing"),
        )
        .unwrap();
    articles
        .insert(ArticleRecord::new(
            "a2",
            "Async Rust in Production",
            "running tokio services at scale",
        ))
        .unwrap();

    let portfolio = MemoryContentStore::new(ContentKind::Portfolio);
    portfolio
        .insert(PortfolioRecord::new(
            "p1",
            "Campaign Analytics Dashboard",
            "marketing analytics with cohort views",
        ))
        .unwrap();

    let case_studies = MemoryContentStore::new(ContentKind::CaseStudy);
    case_studies
        .insert(
            CaseStudyRecord::new("c1", "Retail Platform Rebuild", "faster storefront")
                .with_solution("improved their marketing funnel"),
        )
        .unwrap();

    let history = MemoryContentStore::new(ContentKind::History);
    history
        .insert(HistoryRecord::new(
            "h1",
            "Marketing Engineer",
            "Acme Corp",
            "built campaign tooling",
        ))
        .unwrap();

    SearchOrchestrator::new(
        Arc::new(articles),
        Arc::new(portfolio),
        Arc::new(case_studies),
        Arc::new(history),
    )
}

struct FailingRepository(ContentKind);

#[async_trait]
impl ContentRepository for FailingRepository {
    fn kind(&self) -> ContentKind {
        self.0
    }

    async fn find_matching(&self, _query: &str) -> folio::Result<Vec<ContentRecord>> {
        Err(folio::Error::repository(self.0, "connection refused"))
    }
}

async fn spawn_server(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = folio::create_router(state, Duration::from_secs(5));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn search_returns_the_ranked_envelope() {
    let base = spawn_server(AppState::new(seeded_orchestrator(), 1000)).await;

    let body: serde_json::Value = reqwest::get(format!("{base}/search?q=marketing"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["query"], "marketing");
    let results = body["results"].as_array().unwrap();
    assert!(!results.is_empty());
    assert!(body["totalResults"].as_u64().unwrap() >= results.len() as u64);

    let top = &results[0];
    assert_eq!(top["id"], "a1");
    assert_eq!(top["type"], "blog");
    assert_eq!(top["url"], "/blog/ai-marketing");
    assert!(top["relevanceScore"].as_f64().unwrap() > 0.5);

    // descending by relevance across the whole page
    let scores: Vec<f64> = results
        .iter()
        .map(|r| r["relevanceScore"].as_f64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn too_short_query_is_a_well_formed_200() {
    let base = spawn_server(AppState::new(seeded_orchestrator(), 1000)).await;

    for path in ["/search?q=a", "/search"] {
        let response = reqwest::get(format!("{base}{path}")).await.unwrap();
        assert_eq!(response.status(), 200);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Query must be at least 2 characters long");
        assert_eq!(body["totalResults"], 0);
        assert!(body["results"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn repository_failure_is_a_generic_500() {
    let portfolio = MemoryContentStore::new(ContentKind::Portfolio);
    let case_studies = MemoryContentStore::new(ContentKind::CaseStudy);
    let history = MemoryContentStore::new(ContentKind::History);
    let orchestrator = SearchOrchestrator::new(
        Arc::new(FailingRepository(ContentKind::Article)),
        Arc::new(portfolio),
        Arc::new(case_studies),
        Arc::new(history),
    );
    let base = spawn_server(AppState::new(orchestrator, 1000)).await;

    let response = reqwest::get(format!("{base}/search?q=marketing")).await.unwrap();
    assert_eq!(response.status(), 500);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    // internal detail stays server-side
    assert_eq!(body["message"], "Internal server error");
}

#[tokio::test]
async fn limit_parameter_bounds_the_page() {
    let base = spawn_server(AppState::new(seeded_orchestrator(), 1000)).await;

    let body: serde_json::Value = reqwest::get(format!("{base}/search?q=marketing&limit=1"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["results"].as_array().unwrap().len(), 1);
    assert!(body["totalResults"].as_u64().unwrap() > 1);
}

#[tokio::test]
async fn health_reports_status_and_version() {
    let base = spawn_server(AppState::new(seeded_orchestrator(), 1000)).await;

    let body: serde_json::Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn exhausted_rate_limit_returns_429() {
    // capacity 1: the first request drains the bucket
    let base = spawn_server(AppState::new(seeded_orchestrator(), 1)).await;

    let first = reqwest::get(format!("{base}/search?q=marketing")).await.unwrap();
    assert_eq!(first.status(), 200);

    let second = reqwest::get(format!("{base}/search?q=marketing")).await.unwrap();
    assert_eq!(second.status(), 429);

    let body: serde_json::Value = second.json().await.unwrap();
    assert_eq!(body["success"], false);
}
