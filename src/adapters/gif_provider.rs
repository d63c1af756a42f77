use crate::error::ProviderError;
use serenity::async_trait;

/// What to ask the provider for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GifQuery {
    /// A single random GIF
    Random,
    /// Free-text search; the text is never empty
    Search(String),
}

impl GifQuery {
    /// Build a query from user text; empty text means a random GIF
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            GifQuery::Random
        } else {
            GifQuery::Search(text.to_string())
        }
    }

    /// The search text, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            GifQuery::Random => None,
            GifQuery::Search(text) => Some(text),
        }
    }
}

/// A GIF as far as the bot cares: where its original rendition lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gif {
    pub url: String,
}

impl Gif {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Provider answer, shaped by the kind of query that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GifResults {
    /// Answer to `GifQuery::Random`
    Random(Gif),
    /// Answer to `GifQuery::Search`, possibly empty
    Search(Vec<Gif>),
}

/// Interface for the external GIF service
#[async_trait]
pub trait GifProvider: Send + Sync {
    /// Issue exactly one request for `query`
    ///
    /// # Returns
    ///
    /// * `Ok(GifResults::Random(_))` for `GifQuery::Random`
    /// * `Ok(GifResults::Search(_))` for `GifQuery::Search`, empty when nothing matched
    /// * `Err(_)` on transport failure, non-success status, or a malformed body
    async fn fetch(&self, query: &GifQuery) -> Result<GifResults, ProviderError>;
}
