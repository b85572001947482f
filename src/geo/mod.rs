// src/geo/mod.rs
// Geographic-to-planar projection seam
// RELEVANT FILES:src/geo/project.rs,src/import/pipeline.rs

mod project;

pub use project::{LocalProjection, Projector};
