use super::presence::Presence;
use serenity::all::ActivityData;
use serenity::prelude::Context;
use tracing::debug;

/// Presence updates sent through the shard that delivered the event
pub struct SerenityPresence {
    ctx: Context,
}

impl SerenityPresence {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }
}

impl Presence for SerenityPresence {
    fn set_playing(&self, label: &str) {
        debug!(%label, "Updating presence");
        self.ctx.set_activity(Some(ActivityData::playing(label)));
    }
}
