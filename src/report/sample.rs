use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::IteratorRandom;

/// Draw `max(min, min(max, n))` members at random, capped at `n`.
///
/// `min` and `max` are counts, not probabilities. The size is fixed by the
/// bounds; only which members are kept is random. When `min` exceeds the
/// set size the whole set comes back; an inverted range (`min > max`)
/// collapses to exactly `min` members. Neither case is an error.
pub fn bounded_random_subset<R>(urls: &BTreeSet<String>, min: usize, max: usize, rng: &mut R) -> BTreeSet<String>
where
    R: Rng + ?Sized,
{
    let target = sample_size(urls.len(), min, max);
    urls.iter()
        .choose_multiple(rng, target)
        .into_iter()
        .cloned()
        .collect()
}

fn sample_size(n: usize, min: usize, max: usize) -> usize {
    min.max(max.min(n)).min(n)
}
