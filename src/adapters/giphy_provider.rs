use super::gif_provider::{GifProvider, GifQuery, GifResults};
use super::giphy_response::{RandomResponse, SearchResponse};
use crate::error::ProviderError;
use anyhow::Context as _;
use serenity::async_trait;
use tracing::debug;
use url::Url;

/// Maximum number of candidates requested per search
pub const SEARCH_LIMIT: u32 = 25;

/// Content rating filter applied to every request (general audience)
pub const RATING: &str = "g";

/// GifProvider backed by the Giphy HTTP API
pub struct GiphyProvider {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl GiphyProvider {
    /// Create a new GiphyProvider
    ///
    /// # Arguments
    ///
    /// * `base_url` - API root, e.g. `https://api.giphy.com/`
    /// * `api_key` - Giphy credential sent as the `api_key` query parameter
    pub fn new(base_url: Url, api_key: String) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Building HTTP Client")?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Build the request URL for `query`
    ///
    /// Query text is form-encoded, so `thumbs up` becomes `q=thumbs+up`.
    pub fn request_url(&self, query: &GifQuery) -> Result<Url, url::ParseError> {
        let url = match query {
            GifQuery::Random => {
                let mut url = self.base_url.join("v1/gifs/random")?;
                url.query_pairs_mut()
                    .append_pair("api_key", &self.api_key)
                    .append_pair("rating", RATING);
                url
            }
            GifQuery::Search(text) => {
                let mut url = self.base_url.join("v1/gifs/search")?;
                url.query_pairs_mut()
                    .append_pair("api_key", &self.api_key)
                    .append_pair("q", text)
                    .append_pair("limit", &SEARCH_LIMIT.to_string())
                    .append_pair("rating", RATING);
                url
            }
        };
        Ok(url)
    }
}

#[async_trait]
impl GifProvider for GiphyProvider {
    async fn fetch(&self, query: &GifQuery) -> Result<GifResults, ProviderError> {
        let url = self.request_url(query)?;

        // The URL carries the credential, so only the query is logged
        debug!(?query, "Requesting GIF from provider");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let results = match query {
            GifQuery::Random => {
                let body = response.json::<RandomResponse>().await?;
                GifResults::Random(body.data.into())
            }
            GifQuery::Search(_) => {
                let body = response.json::<SearchResponse>().await?;
                GifResults::Search(body.into_gifs())
            }
        };

        Ok(results)
    }
}
