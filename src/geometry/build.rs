// src/geometry/build.rs
// Polygon and polyline construction from ordered point lists
// Both operations fail fast below their vertex minimum, before any mutation
// RELEVANT FILES:src/geometry/mod.rs,src/geometry/extrude.rs,src/import/rules.rs

use glam::Vec3;

use super::{EdgeChain, FaceHandle, GeometryError, GeometryResult, MeshBuffer};

/// Append `points` as new vertices and create one closed n-gon face over
/// them, in input order.
///
/// Requires at least three points. The input order is assumed to already be a
/// consistent ring winding; no validation or reordering is performed, and a
/// zero-area ring still produces a face; whether to extrude degenerate
/// geometry is the caller's call. Elevation is carried per point, so a caller
/// can place the whole ring at a base offset.
pub fn build_polygon(mesh: &mut MeshBuffer, points: &[Vec3]) -> GeometryResult<FaceHandle> {
    if points.len() < 3 {
        return Err(GeometryError::PolygonTooSmall(points.len()));
    }

    let ring: Vec<u32> = points.iter().map(|&p| mesh.push_vertex(p)).collect();
    Ok(mesh.push_face(ring))
}

/// Append `points` as new vertices and connect each consecutive pair with an
/// edge, leaving the chain open.
///
/// Requires at least two points. No edge is created between the last and
/// first vertex.
pub fn build_polyline(mesh: &mut MeshBuffer, points: &[Vec3]) -> GeometryResult<EdgeChain> {
    if points.len() < 2 {
        return Err(GeometryError::PolylineTooSmall(points.len()));
    }

    let start_vertex = mesh.vertex_count() as u32;
    let mut previous: Option<u32> = None;
    for &point in points {
        let vertex = mesh.push_vertex(point);
        if let Some(prev) = previous {
            mesh.edges.push([prev, vertex]);
        }
        previous = Some(vertex);
    }

    Ok(EdgeChain {
        start_vertex,
        vertex_count: points.len() as u32,
    })
}
