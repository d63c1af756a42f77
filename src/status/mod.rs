pub mod response;
pub mod router;
pub mod state;

pub use response::{HealthResponse, StatusResponse};
pub use router::{bind, health, router, serve, status_report};
pub use state::{BotStatus, GuildCount, STARTING_UP};
