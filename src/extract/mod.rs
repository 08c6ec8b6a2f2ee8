//! Trace extraction: granularity resolution, the per-file collector, and
//! ground-truth aggregation/export.

mod collector;
mod export;
mod granularity;

pub use collector::collect_traces;
pub use export::{extract_ground_truth, render_trace_listing, write_trace_files};
pub use granularity::{Granularity, resolve_granularity};
