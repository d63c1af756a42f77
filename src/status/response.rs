use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub bot: String,
    /// Whole seconds since the gateway connection
    pub uptime: u64,
    pub guilds: usize,
}

impl StatusResponse {
    pub fn online(bot: &str, uptime: u64, guilds: usize) -> Self {
        Self {
            status: "online".to_string(),
            bot: bot.to_string(),
            uptime,
            guilds,
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339 UTC timestamp with millisecond precision
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy_now() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
