//! folio-server binary
//!
//! Seeds the in-memory content stores with demo portfolio content and serves
//! the search API. Content for a real deployment would come from a
//! database-backed implementation of `ContentRepository`.

use clap::Parser;
use folio_content::MemoryContentStore;
use folio_core::limits::{DEFAULT_PORT, DEFAULT_RATE_LIMIT_RPS, DEFAULT_REQUEST_TIMEOUT_SECS};
use folio_core::{
    ArticleRecord, CaseStudyRecord, ContentKind, HistoryRecord, PortfolioRecord, Result,
};
use folio_search::SearchOrchestrator;
use folio_server::handlers::AppState;
use folio_server::create_router;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio-server", about = "Portfolio content search service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Request rate limit (requests per second)
    #[arg(long, default_value_t = DEFAULT_RATE_LIMIT_RPS)]
    rate_limit: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    request_timeout_secs: u64,
}

fn seed_demo_content() -> Result<SearchOrchestrator> {
    let articles = MemoryContentStore::new(ContentKind::Article);
    articles.insert(
        ArticleRecord::new(
            "a1",
            "How AI is Transforming Marketing",
            "Marketing teams are adopting AI for campaign planning, content \
             generation and attribution. This post walks through real rollouts.",
        )
        .with_slug("ai-marketing")
        .with_category("AI & Marketing")
        .with_tags(vec!["ai".into(), "marketing".into()]),
    )?;
    articles.insert(
        ArticleRecord::new(
            "a2",
            "Async Rust in Production",
            "Two years of running tokio services: what worked, what bit us, \
             and how we structure our async code today.",
        )
        .with_slug("async-rust")
        .with_category("Engineering"),
    )?;

    let portfolio = MemoryContentStore::new(ContentKind::Portfolio);
    portfolio.insert(
        PortfolioRecord::new(
            "p1",
            "Campaign Analytics Dashboard",
            "Real-time marketing analytics dashboard with cohort views and \
             attribution reporting.",
        )
        .with_slug("campaign-dashboard")
        .with_category("Web Apps")
        .with_tags(vec!["react".into(), "analytics".into()]),
    )?;

    let case_studies = MemoryContentStore::new(ContentKind::CaseStudy);
    case_studies.insert(
        CaseStudyRecord::new(
            "c1",
            "Retail Platform Rebuild",
            "A regional retailer needed a faster storefront.",
        )
        .with_challenge("Legacy monolith with ten-second page loads.")
        .with_solution("Incremental rewrite behind a reverse proxy; improved their marketing funnel along the way.")
        .with_slug("retail-rebuild"),
    )?;

    let history = MemoryContentStore::new(ContentKind::History);
    history.insert(HistoryRecord::new(
        "h1",
        "Senior Engineer",
        "Acme Corp",
        "Led the platform team; built campaign tooling and internal services.",
    ))?;

    Ok(SearchOrchestrator::new(
        Arc::new(articles),
        Arc::new(portfolio),
        Arc::new(case_studies),
        Arc::new(history),
    ))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let orchestrator = seed_demo_content()?;
    let state = AppState::new(orchestrator, args.rate_limit);
    let app = create_router(state, Duration::from_secs(args.request_timeout_secs));

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "folio-server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
