//! Request and response data transfer objects
//!
//! The response envelope mirrors what the search dialog on the site expects:
//! camelCase keys, a `success` flag, the ranked results, and optional
//! suggestions.

use folio_core::{ContentKind, ScoredResult, SearchOutcome};
use serde::{Deserialize, Serialize};

/// Query parameters for `GET /search`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// The raw query; absent is treated as empty (and rejected as too short)
    pub q: Option<String>,
    /// Requested result count; defaulted and clamped by the handler
    pub limit: Option<usize>,
}

/// One result entry in the search response
#[derive(Debug, Serialize)]
pub struct SearchResultDto {
    /// Source record id
    pub id: String,
    /// Display title
    pub title: String,
    /// Searchable body text
    pub content: String,
    /// Content type: `blog`, `project`, `case-study` or `experience`
    #[serde(rename = "type")]
    pub kind: ContentKind,
    /// URL slug, when the source record has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Category label, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Short display excerpt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Site-relative link for the result
    pub url: String,
    /// Relevance score in `[0, 1]`
    #[serde(rename = "relevanceScore")]
    pub relevance_score: f32,
}

impl From<ScoredResult> for SearchResultDto {
    fn from(result: ScoredResult) -> Self {
        let item = result.item;
        SearchResultDto {
            id: item.id,
            title: item.title,
            content: item.body,
            kind: item.kind,
            slug: item.slug,
            category: item.category,
            excerpt: item.excerpt,
            url: item.url_path,
            relevance_score: result.score,
        }
    }
}

/// The `GET /search` response envelope
#[derive(Debug, Serialize)]
pub struct SearchResponseBody {
    /// False only for the validation ("query too short") response
    pub success: bool,
    /// Ranked results, descending by relevance
    pub results: Vec<SearchResultDto>,
    /// Total matches before limit truncation
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    /// The query that was searched
    pub query: String,
    /// Alternate query terms; empty unless the result set was thin
    pub suggestions: Vec<String>,
    /// Validation message, when the query was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<SearchOutcome> for SearchResponseBody {
    fn from(outcome: SearchOutcome) -> Self {
        SearchResponseBody {
            success: !outcome.is_rejected(),
            results: outcome.results.into_iter().map(Into::into).collect(),
            total_results: outcome.total_results,
            query: outcome.query,
            suggestions: outcome.suggestions,
            message: outcome.message,
        }
    }
}

/// The `GET /health` response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok` while the process is serving
    pub status: String,
    /// Crate version
    pub version: String,
    /// Seconds since the server started
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::SearchableItem;

    fn scored(id: &str, score: f32) -> ScoredResult {
        ScoredResult::new(
            SearchableItem {
                id: id.to_string(),
                kind: ContentKind::CaseStudy,
                title: "Launch".to_string(),
                body: "body".to_string(),
                category: None,
                excerpt: Some("body".to_string()),
                slug: None,
                url_path: format!("/case-study/{id}"),
            },
            score,
        )
    }

    #[test]
    fn test_result_dto_wire_shape() {
        let dto: SearchResultDto = scored("c1", 0.25).into();
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["type"], "case-study");
        assert_eq!(json["url"], "/case-study/c1");
        assert_eq!(json["relevanceScore"], 0.25);
        // absent optionals are omitted, not null
        assert!(json.get("slug").is_none());
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_envelope_success_flag_tracks_rejection() {
        let ok: SearchResponseBody = SearchOutcome {
            query: "marketing".to_string(),
            results: vec![scored("c1", 0.5)],
            total_results: 1,
            suggestions: vec![],
            message: None,
            stats: Default::default(),
        }
        .into();
        assert!(ok.success);

        let rejected: SearchResponseBody = SearchOutcome::too_short("a").into();
        assert!(!rejected.success);
        assert!(rejected.message.is_some());
        let json = serde_json::to_value(&rejected).unwrap();
        assert_eq!(json["totalResults"], 0);
    }
}
