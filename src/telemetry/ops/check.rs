use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Check;

#[derive(Copy, Clone, Debug)]
pub enum Phase { LoadConfig, Snapshot, Diff, Emit }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::LoadConfig => "load_config",
        Phase::Snapshot => "snapshot",
        Phase::Diff => "diff",
        Phase::Emit => "emit",
    }}
    fn span(&self) -> Span { match self {
        Phase::LoadConfig => info_span!("load_config"),
        Phase::Snapshot => info_span!("snapshot"),
        Phase::Diff => info_span!("diff"),
        Phase::Emit => info_span!("emit"),
    }}
}

impl OpMarker for Check {
    const NAME: &'static str = "check";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("check") }
}
