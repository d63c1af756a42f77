use super::journal::Journal;
use gifbot::adapters::{GifProvider, GifQuery, GifResults};
use gifbot::error::ProviderError;
use serenity::async_trait;

/// GifProvider returning a canned answer, or a 502 from upstream when none is set
pub struct MockProvider {
    journal: Journal,
    results: Option<GifResults>,
}

impl MockProvider {
    pub fn returning(journal: &Journal, results: GifResults) -> Self {
        Self {
            journal: journal.clone(),
            results: Some(results),
        }
    }

    pub fn failing(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            results: None,
        }
    }

    /// Queries received so far
    pub fn queries(&self) -> Vec<String> {
        self.journal.with_prefix("fetch:")
    }
}

pub fn describe_query(query: &GifQuery) -> String {
    match query {
        GifQuery::Random => "random".to_string(),
        GifQuery::Search(text) => format!("search={}", text),
    }
}

#[async_trait]
impl GifProvider for MockProvider {
    async fn fetch(&self, query: &GifQuery) -> Result<GifResults, ProviderError> {
        self.journal.record(format!("fetch:{}", describe_query(query)));

        self.results
            .clone()
            .ok_or(ProviderError::Status(reqwest::StatusCode::BAD_GATEWAY))
    }
}
