use super::journal::Journal;
use gifbot::adapters::CommandRegistry;
use serenity::async_trait;
use serenity::builder::CreateCommand;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// CommandRegistry keeping the published descriptors as JSON
pub struct MockRegistry {
    journal: Journal,
    failing_publishes: AtomicUsize,
    pub published: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl MockRegistry {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            failing_publishes: AtomicUsize::new(0),
            published: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(journal: &Journal) -> Self {
        Self::failing_times(journal, usize::MAX)
    }

    /// Make the first `count` publishes fail
    pub fn failing_times(journal: &Journal, count: usize) -> Self {
        Self {
            failing_publishes: AtomicUsize::new(count),
            ..Self::new(journal)
        }
    }

    pub fn publish_count(&self) -> usize {
        self.journal.entries().iter().filter(|entry| *entry == "publish").count()
    }

    pub fn get_published(&self) -> Vec<serde_json::Value> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRegistry for MockRegistry {
    async fn publish(&self, commands: Vec<CreateCommand>) -> Result<usize, serenity::Error> {
        self.journal.record("publish");
        let remaining = self.failing_publishes.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failing_publishes.store(remaining - 1, Ordering::SeqCst);
            return Err(serenity::Error::Other("401: Unauthorized"));
        }

        let count = commands.len();
        let mut published = self.published.lock().unwrap();
        for command in commands {
            published.push(serde_json::to_value(command)?);
        }
        Ok(count)
    }
}
