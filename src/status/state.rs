//! Connection facts shared between the gateway handler and the status server.
//!
//! The gateway handler records the connection once READY arrives; the status
//! routes only ever read it. Before that the report falls back to a
//! "Starting up..." placeholder with zero uptime and zero guilds.

use super::response::StatusResponse;
use std::sync::{Arc, OnceLock};
use std::time::Instant;
use tracing::debug;

/// Placeholder bot label reported before the gateway is ready
pub const STARTING_UP: &str = "Starting up...";

/// Source of the current guild count
pub trait GuildCount: Send + Sync {
    fn guild_count(&self) -> usize;
}

impl GuildCount for serenity::cache::Cache {
    fn guild_count(&self) -> usize {
        serenity::cache::Cache::guild_count(self)
    }
}

struct Connection {
    tag: String,
    connected_at: Instant,
    guilds: Arc<dyn GuildCount>,
}

/// Read-mostly bot state for the status endpoint
#[derive(Default)]
pub struct BotStatus {
    connection: OnceLock<Connection>,
}

impl BotStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the first successful gateway connection
    ///
    /// Later READY events (new sessions after a reconnect) keep the original
    /// record, so uptime counts from the first connection.
    pub fn mark_connected(&self, tag: String, guilds: Arc<dyn GuildCount>) {
        self.mark_connected_since(tag, guilds, Instant::now());
    }

    pub fn mark_connected_since(&self, tag: String, guilds: Arc<dyn GuildCount>, since: Instant) {
        let connection = Connection {
            tag,
            connected_at: since,
            guilds,
        };

        if self.connection.set(connection).is_err() {
            debug!("Connection already recorded, keeping the first one");
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection.get().is_some()
    }

    /// Snapshot for `GET /`
    pub fn report(&self) -> StatusResponse {
        match self.connection.get() {
            Some(connection) => StatusResponse::online(
                &connection.tag,
                connection.connected_at.elapsed().as_secs(),
                connection.guilds.guild_count(),
            ),
            None => StatusResponse::online(STARTING_UP, 0, 0),
        }
    }
}
