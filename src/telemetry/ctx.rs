use anyhow::Result;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::{info, debug, warn, Span};

use crate::output::{Emitter, OutputConfig};
use crate::output::types::{Envelope, Meta};
use crate::report::ChangeSet;

use super::ops::check::Check;

pub trait PhaseSpan {
    fn name(&self) -> &'static str;
    fn span(&self) -> Span;
}

pub trait OpMarker {
    const NAME: &'static str;
    type Phase: PhaseSpan;
    fn root_span() -> Span;
}

pub struct LogCtx<O: OpMarker> {
    pub(crate) json: bool,
    pub(crate) _marker: PhantomData<O>,
}

impl<O: OpMarker> LogCtx<O> {
    fn op_name(&self) -> &'static str { O::NAME }

    pub fn root_span(&self) -> Span { O::root_span() }

    pub fn root_span_kv<'a, T>(&self, fields: T) -> Span
    where
        T: IntoIterator<Item = (&'a str, String)>,
    {
        let span = self.root_span();
        let details = kv_to_string(fields);
        if details.is_empty() {
            info!(op = %self.op_name(), "start");
        } else {
            info!(op = %self.op_name(), details = %details, "start");
        }
        span
    }

    pub fn span(&self, ph: &O::Phase) -> Span { ph.span() }

    pub fn span_kv<'a, T>(&self, ph: &O::Phase, fields: T) -> Span
    where
        T: IntoIterator<Item = (&'a str, String)>,
    {
        let span = self.span(ph);
        let details = kv_to_string(fields);
        if !details.is_empty() {
            debug!(op = %self.op_name(), phase = ph.name(), details = %details, "span_start");
        }
        span
    }

    pub fn info(&self, msg: impl AsRef<str>) { if self.json { info!(op = %self.op_name(), "{}", msg.as_ref()); } else { info!("{}", msg.as_ref()); } }
    pub fn warn(&self, msg: impl AsRef<str>) { if self.json { warn!(op = %self.op_name(), "{}", msg.as_ref()); } else { warn!("{}", msg.as_ref()); } }

    pub fn debug_kv<'a, D>(&self, msg: &str, kv: D)
    where
        D: IntoIterator<Item = (&'a str, String)>,
    {
        let details = kv_to_string(kv);
        if self.json { debug!(op = %self.op_name(), details = %details, "{}", msg); }
        else { debug!("{} {}", msg, details); }
    }

    /// Write the command outcome to stdout: `text` for humans, `result` in the
    /// JSON envelope when `--json` is set.
    pub fn emit<T: Serialize>(&self, result: &T, text: String, meta: Option<Meta>) -> Result<()> {
        let env = Envelope::result(self.op_name(), result, meta)?.with_text(text);
        Emitter::new(OutputConfig::from_env()).emit(&env)?;
        Ok(())
    }
}

impl LogCtx<Check> {
    pub fn summary(&self, full: &ChangeSet, reported: &ChangeSet) {
        let (d, a, c) = (full.disappeared.len(), full.appeared.len(), full.changed.len());
        let (rd, ra, rc) = (reported.disappeared.len(), reported.appeared.len(), reported.changed.len());
        if self.json { info!(op = %self.op_name(), disappeared = d, appeared = a, changed = c, reported_disappeared = rd, reported_appeared = ra, reported_changed = rc, "check_summary"); }
        else { info!("📊 Changes — disappeared={}/{} appeared={}/{} changed={}/{} (reported/total)", rd, d, ra, a, rc, c); }
    }
}

fn kv_to_string<'a, T>(kv: T) -> String
where
    T: IntoIterator<Item = (&'a str, String)>,
{
    let mut parts: Vec<String> = Vec::new();
    for (k, v) in kv { parts.push(format!("{}={}", k, v)); }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_pairs_join_with_spaces() {
        let s = kv_to_string([("pages", "3".to_string()), ("seed", "None".to_string())]);
        assert_eq!(s, "pages=3 seed=None");
    }

    #[test]
    fn no_pairs_no_details() {
        assert!(kv_to_string(std::iter::empty::<(&str, String)>()).is_empty());
    }
}
