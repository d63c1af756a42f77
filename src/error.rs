//! Error taxonomy.
//!
//! Every failure the bot can hit falls into one of the `BotError` kinds, and
//! each kind has a fixed handling policy:
//!
//! - `Config`: fatal at startup, the process exits before connecting.
//! - `Registration`: logged, the gateway connection stays up.
//! - `Provider`: contained to one invocation and reported to the caller.
//! - `Platform`: logged only.

use thiserror::Error;

/// Top-level error kinds.
#[derive(Error, Debug)]
pub enum BotError {
    /// Required configuration is missing or unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// Publishing the command set to Discord failed.
    ///
    /// Boxed because `serenity::Error` is large.
    #[error("command registration failed: {0}")]
    Registration(#[source] Box<serenity::Error>),

    /// Fetching a GIF from the provider failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A Discord call outside of registration failed (defer, reply, edit).
    #[error("discord request failed: {0}")]
    Platform(#[source] Box<serenity::Error>),
}

impl BotError {
    pub fn registration(err: serenity::Error) -> Self {
        BotError::Registration(Box::new(err))
    }

    pub fn platform(err: serenity::Error) -> Self {
        BotError::Platform(Box::new(err))
    }
}

/// Failures talking to the GIF provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport failure or an undecodable response body.
    #[error("provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status code.
    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),

    /// The configured base URL cannot carry the provider endpoint path.
    #[error("invalid provider url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
