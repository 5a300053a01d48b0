use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config;
use crate::telemetry::{self};
use crate::telemetry::ops::pages::Phase as PagesPhase;

#[derive(Serialize)]
pub struct PageList {
    pub source: String,
    pub min_pages: usize,
    pub max_pages: usize,
    pub pages: Vec<String>,
}

/// pagewatch pages: print the monitored page universe, one URL per line.
pub fn run(config_path: &Path) -> Result<()> {
    let log = telemetry::pages();
    let _g = log.root_span_kv([("config", config_path.display().to_string())]).entered();

    let cfg = {
        let _s = log.span(&PagesPhase::LoadConfig).entered();
        config::load(config_path).with_context(|| format!("load config {}", config_path.display()))?
    };

    let _s = log.span(&PagesPhase::List).entered();
    log.info(format!("📡 {} monitored page(s)", cfg.pages.len()));
    let list = PageList {
        source: cfg.path.display().to_string(),
        min_pages: cfg.min_pages,
        max_pages: cfg.max_pages,
        pages: cfg.pages.into_iter().collect(),
    };
    let text = list.pages.join("\n");
    log.emit(&list, text, None)
}
