/// Interface for the bot's presence label
///
/// The label is cosmetic and last-write-wins: concurrent invocations may
/// interleave their updates, and nothing ever reads it back, so no locking
/// is done around it.
pub trait Presence: Send + Sync {
    /// Show `label` as the bot's "Playing" activity
    fn set_playing(&self, label: &str);
}
