// src/lib.rs
// Crate hub for the way-to-mesh geometry core
// RELEVANT FILES:src/import/pipeline.rs,src/geometry/mod.rs,src/osm/model.rs

//! Convert map "ways" (ordered node lists with key/value tags) into planar or
//! extruded 3D geometry, tagged with semantic roles for downstream rendering.
//!
//! The crate is the geometry-generation core of a larger map-import pipeline.
//! Parsing raw map data, the geographic projection itself, and scene
//! management are external collaborators reached through the [`NodeSource`],
//! [`Projector`], and [`SceneSink`] traits. Everything between lives here:
//! rule dispatch, polygon and polyline topology, vertical extrusion, and the
//! shared-vs-isolated output modes.
//!
//! ```
//! use std::collections::HashMap;
//! use waymesh::{import_ways, ImportOptions, Node, SceneCollector, Tags, Way};
//!
//! let nodes: HashMap<_, _> = [
//!     (1, Node { id: 1, lat: 0.0, lon: 0.0 }),
//!     (2, Node { id: 2, lat: 0.0, lon: 0.0001 }),
//!     (3, Node { id: 3, lat: 0.0001, lon: 0.0001 }),
//!     (4, Node { id: 4, lat: 0.0001, lon: 0.0 }),
//! ]
//! .into();
//! let way = Way {
//!     id: 100,
//!     nodes: vec![1, 2, 3, 4, 1],
//!     tags: [("building", "yes"), ("height", "12m")].into_iter().collect::<Tags>(),
//! };
//!
//! let projection = waymesh::LocalProjection::new(0.0, 0.0);
//! let mut scene = SceneCollector::new();
//! let report = import_ways(&[way], &nodes, &projection, &ImportOptions::default(), &mut scene);
//! assert_eq!(report.stats.ways_built, 1);
//! assert_eq!(scene.entities.len(), 1);
//! ```

pub mod error;
pub mod geo;
pub mod geometry;
pub mod import;
pub mod osm;

pub use error::{ImportError, ImportResult};
pub use geo::{LocalProjection, Projector};
pub use geometry::{
    build_polygon, build_polyline, extrude_chain, extrude_face, validate_mesh, EdgeChain,
    Extrusion, FaceHandle, GeometryError, GeometryResult, MeshBuffer, MeshStats,
    MeshValidationIssue, MeshValidationReport,
};
pub use import::{
    classify, entity_name, import_ways, import_ways_into, GeometrySink, ImportOptions,
    ImportReport, ImportStats, IsolatedSink, MatchPolicy, MaterialBinding, MaterialRole,
    OptionsError, OutputEntity, RuleKind, SceneCollector, SceneSink, SharedSink,
};
pub use osm::{parse_scalar, Node, NodeSource, OsmId, Scalar, ScalarError, Tags, Unit, Way};
