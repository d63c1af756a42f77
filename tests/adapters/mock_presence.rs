use super::journal::Journal;
use gifbot::adapters::Presence;

/// Presence recording each label it is given
pub struct MockPresence {
    journal: Journal,
}

impl MockPresence {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.journal.with_prefix("presence:")
    }

    pub fn current(&self) -> Option<String> {
        self.labels().pop()
    }
}

impl Presence for MockPresence {
    fn set_playing(&self, label: &str) {
        self.journal.record(format!("presence:{}", label));
    }
}
