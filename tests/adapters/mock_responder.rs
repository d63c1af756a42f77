use super::journal::Journal;
use gifbot::adapters::InteractionResponder;
use serenity::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// InteractionResponder recording every reply instead of talking to Discord
pub struct MockResponder {
    journal: Journal,
    fail_defer: bool,
    failing_edits: AtomicUsize,
}

impl MockResponder {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            fail_defer: false,
            failing_edits: AtomicUsize::new(0),
        }
    }

    /// Make `defer` fail
    pub fn failing_defer(mut self) -> Self {
        self.fail_defer = true;
        self
    }

    /// Make the first `count` edits fail
    pub fn failing_edits(self, count: usize) -> Self {
        self.failing_edits.store(count, Ordering::SeqCst);
        self
    }

    /// Content of every edit, in order (failed attempts included)
    pub fn edits(&self) -> Vec<String> {
        self.journal.with_prefix("edit:")
    }

    pub fn ephemeral_replies(&self) -> Vec<String> {
        self.journal.with_prefix("ephemeral:")
    }
}

#[async_trait]
impl InteractionResponder for MockResponder {
    async fn defer(&self) -> Result<(), serenity::Error> {
        self.journal.record("defer");
        if self.fail_defer {
            return Err(serenity::Error::Other("interaction expired"));
        }
        Ok(())
    }

    async fn edit_reply(&self, content: &str) -> Result<(), serenity::Error> {
        self.journal.record(format!("edit:{}", content));

        let remaining = self.failing_edits.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failing_edits.store(remaining - 1, Ordering::SeqCst);
            return Err(serenity::Error::Other("unknown webhook"));
        }
        Ok(())
    }

    async fn reply_ephemeral(&self, content: &str) -> Result<(), serenity::Error> {
        self.journal.record(format!("ephemeral:{}", content));
        Ok(())
    }
}
