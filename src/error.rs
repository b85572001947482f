// src/error.rs
// Central error handling for the import core
// Provides a unified ImportError with per-way failure variants
// RELEVANT FILES:src/import/pipeline.rs,src/geometry/mod.rs,src/osm/scalar.rs

use crate::geometry::GeometryError;
use crate::osm::OsmId;

/// Centralized error type for import-run operations.
///
/// Every variant describes a failure local to a single way; the import driver
/// logs it, counts it, and moves on to the next way.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("way {way}: node {node} is not in the node store")]
    MissingNode { way: OsmId, node: OsmId },

    #[error("way {way}: height {height} is below min_height {min_height}")]
    HeightBelowMinHeight {
        way: OsmId,
        height: f32,
        min_height: f32,
    },
}

/// Result type alias for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
