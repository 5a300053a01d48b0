use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config;
use crate::output::types::Meta;
use crate::report::{self, types::CheckResult};
use crate::snapshot::{MockSource, SnapshotSource};
use crate::telemetry::{self};
use crate::telemetry::ops::check::Phase as CheckPhase;

/// pagewatch check
#[derive(Args, Debug)]
pub struct CheckCmd {
    /// Fewest URLs to list per category (overrides `min_pages`)
    #[arg(long)] pub min: Option<usize>,
    /// Most URLs to list per category (overrides `max_pages`)
    #[arg(long)] pub max: Option<usize>,
    /// Seed the random source for a reproducible run
    #[arg(long)] pub seed: Option<u64>,
}

pub fn run(config_path: &Path, args: CheckCmd) -> Result<()> {
    let t0 = Instant::now();
    let log = telemetry::check();
    let _g = log.root_span_kv([
        ("config", config_path.display().to_string()),
        ("min", format!("{:?}", args.min)),
        ("max", format!("{:?}", args.max)),
        ("seed", format!("{:?}", args.seed)),
    ]).entered();

    let cfg = {
        let _s = log.span(&CheckPhase::LoadConfig).entered();
        config::load(config_path).with_context(|| format!("load config {}", config_path.display()))?
    };
    if cfg.pages.is_empty() {
        log.warn(format!("⚠️  No pages were found in {}", cfg.path.display()));
        return Ok(());
    }
    let min_pages = args.min.unwrap_or(cfg.min_pages);
    let max_pages = args.max.unwrap_or(cfg.max_pages);

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut source = MockSource::new(rng);
    let yesterday = {
        let _s = log.span_kv(&CheckPhase::Snapshot, [("day", "yesterday".to_string())]).entered();
        source.snapshot(&cfg.pages)
    };
    let today = {
        let _s = log.span_kv(&CheckPhase::Snapshot, [("day", "today".to_string())]).entered();
        source.snapshot(&cfg.pages)
    };
    if yesterday.is_empty() && today.is_empty() {
        log.info("ℹ️  Neither snapshot captured any page");
    }
    log.debug_kv("yesterday's pages", [("pages", serde_json::to_string(&yesterday)?)]);
    log.debug_kv("today's pages", [("pages", serde_json::to_string(&today)?)]);

    let mut rng = source.into_rng();
    let outcome = {
        let _s = log.span(&CheckPhase::Diff).entered();
        report::generate_change_report(&yesterday, &today, min_pages, max_pages, &mut rng)
    };
    if outcome.total.is_empty() { log.info("No changes detected"); }
    else { log.summary(&outcome.total, &outcome.reported); }

    let _s = log.span(&CheckPhase::Emit).entered();
    let result = CheckResult {
        pages: cfg.pages.len(),
        yesterday: yesterday.len(),
        today: today.len(),
        min_pages,
        max_pages,
        seed: args.seed,
        total: outcome.total,
        reported: outcome.reported,
    };
    let meta = Meta { duration_ms: Some(t0.elapsed().as_millis()) };
    log.emit(&result, outcome.text, Some(meta))?;
    log.info("✅ Report generated.");
    Ok(())
}
