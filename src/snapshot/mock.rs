use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;

use super::{Snapshot, SnapshotSource};

/// Stand-in for a real fetcher: keeps a random subset of the pages and gives
/// each one random content.
pub struct MockSource<R> {
    rng: R,
}

impl<R: Rng> MockSource<R> {
    pub fn new(rng: R) -> Self { MockSource { rng } }

    pub fn into_rng(self) -> R { self.rng }
}

impl<R: Rng> SnapshotSource for MockSource<R> {
    fn snapshot(&mut self, pages: &BTreeSet<String>) -> Snapshot {
        let mut urls: Vec<&String> = pages.iter().collect();
        urls.shuffle(&mut self.rng);
        let keep = self.rng.gen_range(0..=urls.len());

        urls.into_iter()
            .take(keep)
            .map(|url| {
                let salt: u32 = self.rng.gen_range(0..100);
                (url.clone(), format!("<html>Random content for {url} {salt}...</html>"))
            })
            .collect()
    }
}
