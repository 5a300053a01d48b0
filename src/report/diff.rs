use std::collections::BTreeSet;

use crate::snapshot::Snapshot;
use super::types::ChangeSet;

/// Compare two snapshots by key membership and, for shared keys, by content.
pub fn compute_changes(old: &Snapshot, new: &Snapshot) -> ChangeSet {
    let disappeared: BTreeSet<String> = old.urls()
        .filter(|url| !new.contains(url))
        .map(str::to_string)
        .collect();
    let appeared: BTreeSet<String> = new.urls()
        .filter(|url| !old.contains(url))
        .map(str::to_string)
        .collect();
    let changed: BTreeSet<String> = old.iter()
        .filter(|(url, content)| new.content(url).is_some_and(|c| c != *content))
        .map(|(url, _)| url.to_string())
        .collect();

    ChangeSet { disappeared, appeared, changed }
}
