use super::definition::{IDLE_PRESENCE, create_gif_command};
use crate::adapters::{CommandRegistry, Presence};
use crate::error::BotError;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Publish the command set and show the idle presence
///
/// The presence is set even when publishing fails: the gateway connection is
/// still usable and any previously registered `/gif` keeps working.
///
/// # Returns
///
/// The number of commands Discord acknowledged, or `BotError::Registration`
pub async fn register_commands<R, P>(registry: &R, presence: &P) -> Result<usize, BotError>
where
    R: CommandRegistry + ?Sized,
    P: Presence + ?Sized,
{
    let published = registry
        .publish(vec![create_gif_command()])
        .await
        .map_err(BotError::registration);

    presence.set_playing(IDLE_PRESENCE);

    let count = published?;
    info!(commands = count, "Slash commands registered");
    Ok(count)
}

/// Publishes the command set once per process
///
/// READY arrives once per shard and again after every fresh session, but the
/// global command set only needs one bulk overwrite. Presence is per shard,
/// so every READY still gets the idle label. A failed publish releases the
/// claim so the next READY tries again.
#[derive(Default)]
pub struct CommandRegistrar {
    claimed: AtomicBool,
}

impl CommandRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one READY
    ///
    /// # Returns
    ///
    /// * `Ok(Some(count))` - this call published the commands
    /// * `Ok(None)` - already published (or in flight); only the presence was set
    /// * `Err(_)` - publishing failed
    pub async fn on_ready<R, P>(&self, registry: &R, presence: &P) -> Result<Option<usize>, BotError>
    where
        R: CommandRegistry + ?Sized,
        P: Presence + ?Sized,
    {
        if self
            .claimed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Slash commands already published, skipping");
            presence.set_playing(IDLE_PRESENCE);
            return Ok(None);
        }

        let result = register_commands(registry, presence).await;
        if result.is_err() {
            self.claimed.store(false, Ordering::Release);
        }
        result.map(Some)
    }

    pub fn is_published(&self) -> bool {
        self.claimed.load(Ordering::Acquire)
    }
}
