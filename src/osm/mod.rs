// src/osm/mod.rs
// Map-data model hub: nodes, ways, tags, and the scalar-with-unit parser
// RELEVANT FILES:src/osm/model.rs,src/osm/scalar.rs,src/import/rules.rs

mod model;
mod scalar;

pub use model::{Node, NodeSource, OsmId, Tags, Way};
pub use scalar::{parse_scalar, Scalar, ScalarError, Unit};
