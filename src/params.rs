use anyhow::Context as _;
use serde::Deserialize;

use crate::error::BotError;

/// Default Giphy API base URL
fn default_giphy_base_url() -> String {
    "https://api.giphy.com/".to_string()
}

/// Default port for the status endpoint
fn default_status_port() -> u16 {
    3000
}

/// Environment as envy sees it, before credential names are resolved
///
/// `TOKEN` / `API` are the names older deployments use. They are separate
/// fields so that having both spellings set is not a duplicate-field error.
#[derive(Deserialize)]
struct RawParams {
    #[serde(default)]
    discord_token: Option<String>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    giphy_api_key: Option<String>,
    #[serde(default)]
    api: Option<String>,

    #[serde(default = "default_giphy_base_url")]
    giphy_base_url: String,
    #[serde(default = "default_status_port")]
    status_port: u16,
}

#[derive(Clone)]
pub struct Params {
    pub discord_token: String,
    pub giphy_api_key: String,
    pub giphy_base_url: String,
    pub status_port: u16,
}

/// Mask sensitive strings by showing only first and last few characters
fn mask_token(s: &str) -> String {
    const VISIBLE_CHARS: usize = 4;

    let chars: Vec<char> = s.chars().collect();

    if chars.len() <= VISIBLE_CHARS * 2 {
        // If string is too short, mask everything except first char
        return match chars.first() {
            Some(first) => format!("{}***", first),
            None => "<empty>".to_string(),
        };
    }

    let head: String = chars[..VISIBLE_CHARS].iter().collect();
    let tail: String = chars[chars.len() - VISIBLE_CHARS..].iter().collect();
    format!("{}***{}", head, tail)
}

impl std::fmt::Debug for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Params")
            .field("discord_token", &mask_token(&self.discord_token))
            .field("giphy_api_key", &mask_token(&self.giphy_api_key))
            .field("giphy_base_url", &self.giphy_base_url)
            .field("status_port", &self.status_port)
            .finish()
    }
}

/// Primary name wins; the legacy name is the fallback. Blank values count as unset.
fn resolve(primary: Option<String>, legacy: Option<String>) -> Option<String> {
    [primary, legacy]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

impl Params {
    /// Load parameters from the process environment
    pub fn new() -> anyhow::Result<Params> {
        Self::from_vars(std::env::vars())
    }

    /// Load parameters from `(NAME, value)` pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Params>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let raw = envy::from_iter::<_, RawParams>(vars).context("Failed to load configuration")?;

        let discord_token = resolve(raw.discord_token, raw.token).ok_or_else(|| {
            BotError::Config("DISCORD_TOKEN (or TOKEN) is not set".to_string())
        })?;
        let giphy_api_key = resolve(raw.giphy_api_key, raw.api).ok_or_else(|| {
            BotError::Config("GIPHY_API_KEY (or API) is not set".to_string())
        })?;

        let params = Params {
            discord_token,
            giphy_api_key,
            giphy_base_url: raw.giphy_base_url,
            status_port: raw.status_port,
        };
        params.validate()?;
        Ok(params)
    }

    /// Reject blank credentials
    pub fn validate(&self) -> Result<(), BotError> {
        if self.discord_token.trim().is_empty() {
            return Err(BotError::Config("DISCORD_TOKEN is empty".to_string()));
        }
        if self.giphy_api_key.trim().is_empty() {
            return Err(BotError::Config("GIPHY_API_KEY is empty".to_string()));
        }
        Ok(())
    }
}
