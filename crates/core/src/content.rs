//! Content record types for the four searchable repositories
//!
//! Each repository returns its own native record shape. The shapes are
//! formalized here as a closed tagged union (`ContentRecord`) so that
//! normalization can match exhaustively instead of duck-typing per call site.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ContentKind
// ============================================================================

/// The four content types served by the search subsystem
///
/// Serialized with the wire names the search UI expects
/// (`blog`, `project`, `case-study`, `experience`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    /// Blog article
    #[serde(rename = "blog")]
    Article,
    /// Portfolio project
    #[serde(rename = "project")]
    Portfolio,
    /// Case study
    #[serde(rename = "case-study")]
    CaseStudy,
    /// Work-history entry
    #[serde(rename = "experience")]
    History,
}

impl ContentKind {
    /// All content kinds, in fan-out order
    ///
    /// This order is the deterministic tie-break for equal relevance scores:
    /// articles, then portfolio items, then case studies, then history.
    pub const fn all() -> [ContentKind; 4] {
        [
            ContentKind::Article,
            ContentKind::Portfolio,
            ContentKind::CaseStudy,
            ContentKind::History,
        ]
    }

    /// Wire name for this kind (`blog`, `project`, `case-study`, `experience`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Article => "blog",
            ContentKind::Portfolio => "project",
            ContentKind::CaseStudy => "case-study",
            ContentKind::History => "experience",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Native record shapes
// ============================================================================

/// A blog article as stored by the article repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Stable identifier
    pub id: String,
    /// Article title
    pub title: String,
    /// Full article body
    pub content: String,
    /// Optional hand-written excerpt, preferred over a truncated body
    pub excerpt: Option<String>,
    /// Optional URL slug; the id is used when absent
    pub slug: Option<String>,
    /// Optional category label
    pub category: Option<String>,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Draft articles are invisible to search
    pub published: bool,
}

impl ArticleRecord {
    /// Create a published article with the required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        ArticleRecord {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            excerpt: None,
            slug: None,
            category: None,
            tags: vec![],
            published: true,
        }
    }

    /// Builder: set excerpt
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    /// Builder: set slug
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Builder: set category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder: set tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Builder: mark as draft
    pub fn draft(mut self) -> Self {
        self.published = false;
        self
    }
}

/// A portfolio project as stored by the portfolio repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRecord {
    /// Stable identifier
    pub id: String,
    /// Project title
    pub title: String,
    /// Project description, used as the searchable body
    pub description: String,
    /// Optional URL slug; the id is used when absent
    pub slug: Option<String>,
    /// Optional category label
    pub category: Option<String>,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Draft projects are invisible to search
    pub published: bool,
}

impl PortfolioRecord {
    /// Create a published portfolio project with the required fields
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        PortfolioRecord {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            slug: None,
            category: None,
            tags: vec![],
            published: true,
        }
    }

    /// Builder: set slug
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Builder: set category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder: set tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Builder: mark as draft
    pub fn draft(mut self) -> Self {
        self.published = false;
        self
    }
}

/// A case study as stored by the case-study repository
///
/// The searchable body is the concatenation of description, challenge and
/// solution; absent sections are skipped, never null-propagated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudyRecord {
    /// Stable identifier
    pub id: String,
    /// Case study title
    pub title: String,
    /// Summary description
    pub description: String,
    /// Optional "challenge" section
    pub challenge: Option<String>,
    /// Optional "solution" section
    pub solution: Option<String>,
    /// Optional URL slug; the id is used when absent
    pub slug: Option<String>,
    /// Optional category label
    pub category: Option<String>,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Draft case studies are invisible to search
    pub published: bool,
}

impl CaseStudyRecord {
    /// Create a published case study with the required fields
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        CaseStudyRecord {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            challenge: None,
            solution: None,
            slug: None,
            category: None,
            tags: vec![],
            published: true,
        }
    }

    /// Builder: set the challenge section
    pub fn with_challenge(mut self, challenge: impl Into<String>) -> Self {
        self.challenge = Some(challenge.into());
        self
    }

    /// Builder: set the solution section
    pub fn with_solution(mut self, solution: impl Into<String>) -> Self {
        self.solution = Some(solution.into());
        self
    }

    /// Builder: set slug
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Builder: set category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder: mark as draft
    pub fn draft(mut self) -> Self {
        self.published = false;
        self
    }
}

/// A work-history entry as stored by the history repository
///
/// History entries have no page of their own; they normalize to the fixed
/// `/#experience` anchor with a synthetic "{position} at {company}" title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Stable identifier
    pub id: String,
    /// Job title
    pub position: String,
    /// Employer name
    pub company: String,
    /// Role description, used as the searchable body
    pub description: String,
    /// Hidden entries are invisible to search
    pub published: bool,
}

impl HistoryRecord {
    /// Create a visible history entry
    pub fn new(
        id: impl Into<String>,
        position: impl Into<String>,
        company: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        HistoryRecord {
            id: id.into(),
            position: position.into(),
            company: company.into(),
            description: description.into(),
            published: true,
        }
    }

    /// Builder: hide from search
    pub fn draft(mut self) -> Self {
        self.published = false;
        self
    }
}

// ============================================================================
// ContentRecord
// ============================================================================

/// Closed union over the four repositories' native record shapes
///
/// Consumed by a single normalization function with exhaustive matching;
/// new content types must be added here, not duck-typed at call sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ContentRecord {
    /// Blog article
    Article(ArticleRecord),
    /// Portfolio project
    Portfolio(PortfolioRecord),
    /// Case study
    CaseStudy(CaseStudyRecord),
    /// Work-history entry
    History(HistoryRecord),
}

impl ContentRecord {
    /// The content kind of this record
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentRecord::Article(_) => ContentKind::Article,
            ContentRecord::Portfolio(_) => ContentKind::Portfolio,
            ContentRecord::CaseStudy(_) => ContentKind::CaseStudy,
            ContentRecord::History(_) => ContentKind::History,
        }
    }

    /// Stable identifier of the underlying record
    pub fn id(&self) -> &str {
        match self {
            ContentRecord::Article(a) => &a.id,
            ContentRecord::Portfolio(p) => &p.id,
            ContentRecord::CaseStudy(c) => &c.id,
            ContentRecord::History(h) => &h.id,
        }
    }

    /// Whether the record is visible to search
    pub fn is_published(&self) -> bool {
        match self {
            ContentRecord::Article(a) => a.published,
            ContentRecord::Portfolio(p) => p.published,
            ContentRecord::CaseStudy(c) => c.published,
            ContentRecord::History(h) => h.published,
        }
    }
}

impl From<ArticleRecord> for ContentRecord {
    fn from(record: ArticleRecord) -> Self {
        ContentRecord::Article(record)
    }
}

impl From<PortfolioRecord> for ContentRecord {
    fn from(record: PortfolioRecord) -> Self {
        ContentRecord::Portfolio(record)
    }
}

impl From<CaseStudyRecord> for ContentRecord {
    fn from(record: CaseStudyRecord) -> Self {
        ContentRecord::CaseStudy(record)
    }
}

impl From<HistoryRecord> for ContentRecord {
    fn from(record: HistoryRecord) -> Self {
        ContentRecord::History(record)
    }
}

// ============================================================================
// Tests
// ============================================================================
