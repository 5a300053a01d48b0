use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

mod mock;

pub use mock::MockSource;

/// Point-in-time mapping from page URL to page content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Snapshot(BTreeMap<String, String>);

impl Snapshot {
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn contains(&self, url: &str) -> bool { self.0.contains_key(url) }
    pub fn content(&self, url: &str) -> Option<&str> { self.0.get(url).map(String::as_str) }
    pub fn urls(&self) -> impl Iterator<Item = &str> { self.0.keys().map(String::as_str) }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> { self.0.iter().map(|(u, c)| (u.as_str(), c.as_str())) }
}

impl From<BTreeMap<String, String>> for Snapshot {
    fn from(pages: BTreeMap<String, String>) -> Self { Snapshot(pages) }
}

impl FromIterator<(String, String)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self { Snapshot(iter.into_iter().collect()) }
}

impl IntoIterator for Snapshot {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

/// Anything that can capture the current state of a set of pages.
///
/// A source may return only some of the requested URLs; missing ones are
/// treated as pages that do not exist at that point in time.
pub trait SnapshotSource {
    fn snapshot(&mut self, pages: &BTreeSet<String>) -> Snapshot;
}
