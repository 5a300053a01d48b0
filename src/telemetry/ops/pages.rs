use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Pages;

#[derive(Copy, Clone, Debug)]
pub enum Phase { LoadConfig, List }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self { Phase::LoadConfig => "load_config", Phase::List => "list" } }
    fn span(&self) -> Span { match self { Phase::LoadConfig => info_span!("load_config"), Phase::List => info_span!("list") } }
}

impl OpMarker for Pages {
    const NAME: &'static str = "pages";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("pages") }
}
