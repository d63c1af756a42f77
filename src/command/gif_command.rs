use super::definition::IDLE_PRESENCE;
use super::options::GifOptions;
use super::select::select_gif;
use crate::adapters::{GifProvider, GifQuery, InteractionResponder, Presence};
use crate::error::BotError;
use std::sync::Arc;
use tracing::{error, info};

/// Reply sent when a search matched nothing
pub const NO_RESULTS_MESSAGE: &str = "No GIFs found for that term.";

/// Reply sent for any failure while serving an invocation
pub const ERROR_MESSAGE: &str = "Error fetching GIF. Please check your API key or try again later.";

/// Result of serving one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GifOutcome {
    /// The reply holds this GIF URL
    Sent(String),
    /// The search matched nothing and the user was told so
    NoResults,
    /// Something failed; the user got the generic error reply if it could be delivered
    Failed,
}

/// Presence label shown while `query` is being fetched
pub fn busy_presence(query: &GifQuery) -> String {
    match query.text() {
        Some(text) => format!("Fetching GIF: {}", text),
        None => "Fetching GIF".to_string(),
    }
}

/// Serves `/gif` invocations end to end
pub struct GifCommand<P>
where
    P: GifProvider,
{
    provider: Arc<P>,
}

impl<P> GifCommand<P>
where
    P: GifProvider,
{
    /// Create a new GifCommand
    ///
    /// # Arguments
    ///
    /// * `provider` - Where GIFs are fetched from
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Handle one invocation
    ///
    /// The interaction is deferred before the provider is called. Whatever
    /// happens afterwards, the presence is back at `IDLE_PRESENCE` when this
    /// returns. Failures never propagate: they are logged and reported to the
    /// user, through the deferred reply when the deferral went through and as
    /// an ephemeral reply otherwise.
    pub async fn handle<R, S>(&self, options: &GifOptions, responder: &R, presence: &S) -> GifOutcome
    where
        R: InteractionResponder + ?Sized,
        S: Presence + ?Sized,
    {
        let query = options.query();

        presence.set_playing(&busy_presence(&query));

        let (acknowledged, result) = match responder.defer().await {
            Ok(()) => (true, self.fetch_and_reply(&query, responder).await),
            Err(err) => (false, Err(BotError::platform(err))),
        };

        presence.set_playing(IDLE_PRESENCE);

        match result {
            Ok(outcome) => {
                info!(?query, ?outcome, "Served /gif invocation");
                outcome
            }
            Err(err) => {
                error!(error = %err, ?query, acknowledged, "Failed to serve /gif invocation");
                Self::report_failure(responder, acknowledged).await;
                GifOutcome::Failed
            }
        }
    }

    /// Fetch from the provider, select, and fill in the deferred reply
    async fn fetch_and_reply<R>(&self, query: &GifQuery, responder: &R) -> Result<GifOutcome, BotError>
    where
        R: InteractionResponder + ?Sized,
    {
        let results = self.provider.fetch(query).await?;

        // ThreadRng is not Send; keep it out of any await
        let selected = select_gif(&results, &mut rand::rng()).cloned();

        let outcome = match selected {
            Some(gif) => GifOutcome::Sent(gif.url),
            None => GifOutcome::NoResults,
        };

        let content = match &outcome {
            GifOutcome::Sent(url) => url.as_str(),
            _ => NO_RESULTS_MESSAGE,
        };

        responder
            .edit_reply(content)
            .await
            .map_err(BotError::platform)?;

        Ok(outcome)
    }

    async fn report_failure<R>(responder: &R, acknowledged: bool)
    where
        R: InteractionResponder + ?Sized,
    {
        let reported = if acknowledged {
            responder.edit_reply(ERROR_MESSAGE).await
        } else {
            responder.reply_ephemeral(ERROR_MESSAGE).await
        };

        if let Err(err) = reported {
            error!(?err, acknowledged, "Failed to deliver error reply");
        }
    }
}
