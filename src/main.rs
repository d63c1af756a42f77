use anyhow::Context as _;
use gifbot::adapters::{
    GiphyProvider, SerenityCommandRegistry, SerenityInteractionResponder, SerenityPresence,
};
use gifbot::command::{CommandRegistrar, GifCommand, GifOptions, is_gif_command};
use gifbot::params::Params;
use gifbot::status::{self, BotStatus};
use std::sync::Arc;
use tracing::{error, info, warn};

use serenity::all::{CommandType, Interaction, ResumedEvent};
use serenity::async_trait;
use serenity::model::gateway::Ready;
use serenity::prelude::*;

struct Handler {
    gif: GifCommand<GiphyProvider>,
    registrar: CommandRegistrar,
    status: Arc<BotStatus>,
}

impl Handler {
    fn new(params: &Params, status: Arc<BotStatus>) -> anyhow::Result<Handler> {
        let base_url = url::Url::parse(&params.giphy_base_url)
            .context("Parsing GIPHY_BASE_URL")?;
        let provider = Arc::new(GiphyProvider::new(
            base_url,
            params.giphy_api_key.clone(),
        )?);

        Ok(Handler {
            gif: GifCommand::new(provider),
            registrar: CommandRegistrar::new(),
            status,
        })
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            tag = %ready.user.tag(),
            user_id = %ready.user.id,
            guilds = ready.guilds.len(),
            "Bot is connected"
        );

        self.status.mark_connected(ready.user.tag(), ctx.cache.clone());

        let registry = SerenityCommandRegistry::new(ctx.http.clone());
        let presence = SerenityPresence::new(ctx);

        // Commands may stay stale until the next successful registration
        if let Err(err) = self.registrar.on_ready(&registry, &presence).await {
            error!(error = %err, "Failed to register slash commands");
        }
    }

    async fn resume(&self, _: Context, _: ResumedEvent) {
        warn!("Gateway session resumed");
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        // Context-menu commands arrive as Interaction::Command too
        if command.data.kind != CommandType::ChatInput || !is_gif_command(&command.data.name) {
            return;
        }

        let options = GifOptions::from_data_options(&command.data.options);
        let responder = SerenityInteractionResponder::new(ctx.http.clone(), command);
        let presence = SerenityPresence::new(ctx);

        self.gif.handle(&options, &responder, &presence).await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Default: gifbot=info, serenity=warn (gateway chatter stays quiet, warnings and errors still show)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gifbot=info,serenity=warn".into()),
        )
        .init();

    info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        description = env!("CARGO_PKG_DESCRIPTION"),
        "Starting application"
    );

    let params = Params::new().inspect_err(|err| error!(error = %err, "Invalid configuration"))?;
    info!(?params, "Application parameters loaded");

    let bot_status = Arc::new(BotStatus::new());

    // The status endpoint runs regardless of the gateway connection
    let status_port = params.status_port;
    let server_status = bot_status.clone();
    tokio::spawn(async move {
        let result = match status::bind(status_port).await {
            Ok(listener) => status::serve(listener, server_status).await,
            Err(err) => Err(err),
        };
        if let Err(err) = result {
            error!(error = ?err, "Status server stopped");
        }
    });

    let mut client = Client::builder(&params.discord_token, GatewayIntents::GUILDS)
        .event_handler(Handler::new(&params, bot_status)?)
        .await
        .context("Creating Discord Client")?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        match shutdown_signal().await {
            Ok(()) => {
                info!("Shutting down bot");
                shard_manager.shutdown_all().await;
            }
            Err(err) => error!(error = ?err, "Failed to listen for shutdown signals"),
        }
    });

    client
        .start_autosharded()
        .await
        .context("Running Discord Client")
}

/// Resolve on SIGINT or SIGTERM
async fn shutdown_signal() -> anyhow::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = signal(SignalKind::terminate()).context("Installing SIGTERM handler")?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result.context("Waiting for SIGINT")?,
            _ = terminate.recv() => {}
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c().await.context("Waiting for Ctrl-C")?;

    Ok(())
}
