// src/import/pipeline.rs
// Per-way import driver: classify, derive scalars, project, build, sink
// One malformed way never aborts the run; failures are logged and counted
// RELEVANT FILES:src/import/rules.rs,src/import/sink.rs,src/import/options.rs

use log::{debug, warn};

use crate::geo::Projector;
use crate::geometry::MeshBuffer;
use crate::osm::{NodeSource, Way};

use super::options::ImportOptions;
use super::rules::{apply, classify, RuleContext, RuleOutcome};
use super::sink::{GeometrySink, IsolatedSink, SceneSink, SharedSink};

/// Counters accumulated over one import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub ways_seen: usize,
    /// Ways accepted by at least one rule predicate.
    pub ways_matched: usize,
    /// Rule invocations that committed geometry.
    pub ways_built: usize,
    /// Rule invocations skipped below their vertex minimum.
    pub ways_skipped: usize,
    /// Ways no predicate accepted.
    pub ways_unmatched: usize,
    /// Rule invocations that failed (missing node, malformed part heights).
    pub ways_failed: usize,
}

/// Result of one import run.
#[derive(Debug)]
pub struct ImportReport {
    /// The combined buffer in shared mode; `None` in isolated mode, where
    /// geometry left through the scene sink instead.
    pub mesh: Option<MeshBuffer>,
    pub stats: ImportStats,
}

/// Process every way to completion, selecting the output mode once per run
/// from `options.single_mesh`.
///
/// In shared mode the scene sink is never called and the combined mesh comes
/// back in the report; in isolated mode each way hands one named entity per
/// matching rule to `scene`, which takes ownership.
pub fn import_ways<N, P, S>(
    ways: &[Way],
    nodes: &N,
    projector: &P,
    options: &ImportOptions,
    scene: &mut S,
) -> ImportReport
where
    N: NodeSource,
    P: Projector,
    S: SceneSink,
{
    if options.single_mesh {
        let mut sink = SharedSink::new();
        let stats = import_ways_into(ways, nodes, projector, options, &mut sink);
        ImportReport {
            mesh: Some(sink.into_mesh()),
            stats,
        }
    } else {
        let mut sink = IsolatedSink::new(scene);
        let stats = import_ways_into(ways, nodes, projector, options, &mut sink);
        ImportReport { mesh: None, stats }
    }
}

/// Run the import against a caller-supplied [`GeometrySink`].
///
/// The driver is synchronous and single-threaded: each way is classified,
/// built, and committed before the next begins, so the sink sees exactly one
/// writer at a time.
pub fn import_ways_into<N, P, K>(
    ways: &[Way],
    nodes: &N,
    projector: &P,
    options: &ImportOptions,
    sink: &mut K,
) -> ImportStats
where
    N: NodeSource,
    P: Projector,
    K: GeometrySink,
{
    let ctx = RuleContext {
        nodes,
        projector,
        options,
    };
    let mut stats = ImportStats::default();

    for way in ways {
        stats.ways_seen += 1;
        let matched = classify(&way.tags, options.match_policy);
        if matched.is_empty() {
            stats.ways_unmatched += 1;
            continue;
        }
        stats.ways_matched += 1;

        for kind in matched {
            debug!("way {}: rule {:?}", way.id, kind);
            let mesh = sink.begin(way);
            match apply(kind, way, &ctx, mesh) {
                Ok(RuleOutcome::Built { bindings }) => {
                    sink.finish(way, bindings);
                    stats.ways_built += 1;
                }
                Ok(RuleOutcome::TooSmall) => {
                    debug!("way {}: too small to render, skipped", way.id);
                    stats.ways_skipped += 1;
                }
                Err(err) => {
                    warn!("{err}");
                    stats.ways_failed += 1;
                }
            }
        }
    }

    stats
}
