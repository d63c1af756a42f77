//! Discord bot answering `/gif` with random, searched, or category GIFs from
//! Giphy, plus a small HTTP status endpoint for uptime checks.

pub mod adapters;
pub mod command;
pub mod error;
pub mod params;
pub mod status;
