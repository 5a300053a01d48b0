use std::collections::BTreeSet;

use serde::Serialize;

/// URLs that disappeared, appeared, or changed content between two snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSet {
    pub disappeared: BTreeSet<String>,
    pub appeared: BTreeSet<String>,
    pub changed: BTreeSet<String>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.disappeared.is_empty() && self.appeared.is_empty() && self.changed.is_empty()
    }
}

/// Full diff, the sampled subset that made it into the letter, and the letter.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub total: ChangeSet,
    pub reported: ChangeSet,
    pub text: String,
}

// Result envelope payload for `check`
#[derive(Serialize)]
pub struct CheckResult {
    pub pages: usize,
    pub yesterday: usize,
    pub today: usize,
    pub min_pages: usize,
    pub max_pages: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub total: ChangeSet,
    pub reported: ChangeSet,
}
