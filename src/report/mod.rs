//! Change reporting between two page snapshots.
//!
//! The core is three set differences ([`compute_changes`]), an optional
//! size-bounded random truncation of each category
//! ([`bounded_random_subset`]), and a plain-text letter ([`render_report`]).

use rand::Rng;

use crate::snapshot::Snapshot;

mod diff;
mod render;
mod sample;
pub mod types;

pub use diff::compute_changes;
pub use render::render_report;
pub use sample::bounded_random_subset;
pub use types::{ChangeSet, ReportOutcome};

/// Diff `yesterday` against `today`, truncate every category to
/// `[min_pages, max_pages]` members and render the letter from the
/// truncated categories.
pub fn generate_change_report<R>(
    yesterday: &Snapshot,
    today: &Snapshot,
    min_pages: usize,
    max_pages: usize,
    rng: &mut R,
) -> ReportOutcome
where
    R: Rng + ?Sized,
{
    let total = compute_changes(yesterday, today);
    let reported = ChangeSet {
        disappeared: bounded_random_subset(&total.disappeared, min_pages, max_pages, rng),
        appeared: bounded_random_subset(&total.appeared, min_pages, max_pages, rng),
        changed: bounded_random_subset(&total.changed, min_pages, max_pages, rng),
    };
    let text = render_report(&reported.disappeared, &reported.appeared, &reported.changed);
    ReportOutcome { total, reported, text }
}
