use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of processing one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// The article was written to this path.
    Success(PathBuf),
    Failure(FetchError),
}

/// Tally of a complete run, in topic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub language: String,
    pub total: usize,
    pub succeeded: usize,
    /// Output files written, one per successful topic.
    pub written: Vec<PathBuf>,
    /// Topics whose lookup or write failed, in input order.
    pub failed: Vec<String>,
}

impl RunSummary {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            ..Self::default()
        }
    }

    /// Fold one topic's outcome into the tally.
    pub fn record(&mut self, topic: &str, result: FetchResult) {
        self.total += 1;
        match result {
            FetchResult::Success(path) => {
                self.succeeded += 1;
                self.written.push(path);
            }
            FetchResult::Failure(_) => self.failed.push(topic.to_string()),
        }
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
