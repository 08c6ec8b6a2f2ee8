use std::fs;
use std::io::Write as _;
use std::path::Path;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::error::ExtractError;
use crate::extract::collector::collect_traces;
use crate::java::JavaUnitParser;
use crate::model::{FeatureTraceMap, merge_trace_maps};

/// Extract the ground truth of a set of sources, given as
/// `(display name, source text)` pairs.
///
/// Files are processed in parallel; each file owns its block stack and trace
/// map, and the per-file maps are merged in input order afterwards. A file
/// the adapter cannot parse is logged and contributes nothing; it does not
/// abort the batch.
pub fn extract_ground_truth<N: AsRef<str> + Sync>(sources: &[(N, String)]) -> FeatureTraceMap {
    let maps: Vec<FeatureTraceMap> = sources
        .par_iter()
        .map(|(name, source)| {
            let mut parser = match JavaUnitParser::new() {
                Ok(parser) => parser,
                Err(e) => {
                    warn!(file = name.as_ref(), error = %e, "parser unavailable");
                    return FeatureTraceMap::new();
                }
            };
            match parser.parse_unit(source) {
                Ok(unit) => collect_traces(&unit, source),
                Err(e) => {
                    warn!(file = name.as_ref(), error = %e, "skipping unparsable file");
                    FeatureTraceMap::new()
                }
            }
        })
        .collect();
    merge_trace_maps(maps)
}

/// Render one feature's traces as a plain-text listing, one element per line.
pub fn render_trace_listing(map: &FeatureTraceMap, feature: &crate::feature::FeatureId) -> String {
    let mut listing = String::new();
    if let Some(traces) = map.get(feature) {
        for trace in traces {
            listing.push_str(trace.as_str());
            listing.push('\n');
        }
    }
    listing
}

/// Write one `<feature>.txt` listing per feature into `output_dir`.
///
/// Stale `.txt` files from a previous run are deleted first. A failure to
/// write one listing is logged and does not abort the rest.
pub fn write_trace_files(map: &FeatureTraceMap, output_dir: &Path) -> Result<(), ExtractError> {
    fs::create_dir_all(output_dir)?;
    for entry in fs::read_dir(output_dir)? {
        let entry = entry?;
        if entry.path().extension().is_some_and(|ext| ext == "txt") {
            if let Err(e) = fs::remove_file(entry.path()) {
                warn!(path = %entry.path().display(), error = %e, "could not clean stale listing");
            }
        }
    }

    for feature in map.keys() {
        let path = output_dir.join(format!("{feature}.txt"));
        let result = fs::File::create(&path)
            .and_then(|mut file| file.write_all(render_trace_listing(map, feature).as_bytes()));
        if let Err(e) = result {
            warn!(path = %path.display(), error = %e, "could not write feature listing");
        }
    }
    info!(path = %output_dir.display(), "feature traces written");
    Ok(())
}
