// src/import/mod.rs
// Import layer: tag-driven rule dispatch, output sinks, and the run driver
// RELEVANT FILES:src/import/rules.rs,src/import/sink.rs,src/import/pipeline.rs

mod materials;
mod options;
mod pipeline;
mod rules;
mod sink;

// Re-export key types for convenience
pub use materials::{MaterialBinding, MaterialRole};
pub use options::{ImportOptions, MatchPolicy, OptionsError};
pub use pipeline::{import_ways, import_ways_into, ImportReport, ImportStats};
pub use rules::{classify, RuleKind};
pub use sink::{
    entity_name, GeometrySink, IsolatedSink, OutputEntity, SceneCollector, SceneSink, SharedSink,
};
