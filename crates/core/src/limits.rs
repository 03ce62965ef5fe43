//! Tuning constants for search, scoring and the HTTP surface
//!
//! All tuning parameters, validation limits, and server defaults are defined
//! here. These are compile-time constants; runtime knobs are CLI arguments on
//! the server binary.

/// Minimum trimmed query length (in characters) worth searching.
///
/// Shorter queries return the defined empty-result outcome without touching
/// any repository.
pub const MIN_QUERY_CHARS: usize = 2;

/// Default number of results returned when the client does not ask for a limit.
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Hard cap on the number of results a single request may return.
pub const MAX_RESULT_LIMIT: usize = 50;

/// Weight for the whole query appearing verbatim in the title.
///
/// Title matches dominate: this alone is half the normalized score range.
pub const TITLE_MATCH_WEIGHT: f32 = 100.0;

/// Weight per (query token, title token) pair where either token is a
/// substring of the other. Captures partial-word matches in both directions.
pub const TITLE_TOKEN_WEIGHT: f32 = 50.0;

/// Weight for the whole query appearing in the category.
pub const CATEGORY_MATCH_WEIGHT: f32 = 30.0;

/// Weight per non-overlapping occurrence of the whole query in the body.
pub const BODY_OCCURRENCE_WEIGHT: f32 = 5.0;

/// Weight per whole-word (word-boundary) match of a query token in the body.
pub const BODY_WORD_WEIGHT: f32 = 10.0;

/// Divisor mapping the raw accumulated score into `[0, 1]`.
///
/// An empirically chosen tuning parameter, not a derived value. Replaceable,
/// but the relative weighting above (title >> category > per-word body > raw
/// substring body) must be preserved.
pub const SCORE_NORMALIZER: f32 = 200.0;

/// Length (in characters) of excerpts derived by truncating a body.
pub const EXCERPT_CHARS: usize = 150;

/// Maximum number of suggestions returned with a response.
pub const MAX_SUGGESTIONS: usize = 5;

/// Suggestions are generated only when fewer results than this survive
/// scoring and truncation.
pub const SUGGESTION_TRIGGER_RESULTS: usize = 3;

/// Minimum length (in characters) for a title token to qualify as a suggestion.
pub const SUGGESTION_MIN_TOKEN_CHARS: usize = 4;

/// Validation message returned for queries shorter than [`MIN_QUERY_CHARS`].
pub const QUERY_TOO_SHORT_MESSAGE: &str = "Query must be at least 2 characters long";

/// Default HTTP port for the server binary.
pub const DEFAULT_PORT: u16 = 8080;

/// Default request rate limit (requests per second) for the server binary.
pub const DEFAULT_RATE_LIMIT_RPS: u64 = 20;

/// Default per-request timeout for the HTTP layer, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
