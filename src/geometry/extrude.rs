// src/geometry/extrude.rs
// Vertical extrusion of faces and edge chains into prism volumes
// Faces become capped solids, open chains become curtain walls
// RELEVANT FILES:src/geometry/build.rs,src/geometry/mod.rs,src/import/rules.rs

use glam::Vec3;

use super::{EdgeChain, FaceHandle, GeometryError, GeometryResult, MeshBuffer};

/// Handles to the top-level faces created by one extrusion, so the caller can
/// bind material roles without re-deriving geometry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extrusion {
    /// One side face per original edge, in ring/chain order.
    pub side_faces: Vec<FaceHandle>,
    /// Offset top cap. `None` for chain extrusions and zero-thickness no-ops.
    pub cap_face: Option<FaceHandle>,
}

/// Extrude a face upward by `thickness`, producing a capped solid.
///
/// Creates one offset copy of each ring vertex, one side quad per ring edge,
/// and a top cap face over the offset vertices. The base face stays in the
/// buffer as the ground cap. A thickness of zero is a no-op that adds no
/// geometry; negative thickness is rejected before any mutation. Extrusion
/// is always upward, so callers wanting a raised base pre-offset the
/// elevation instead.
pub fn extrude_face(
    mesh: &mut MeshBuffer,
    face: FaceHandle,
    thickness: f32,
) -> GeometryResult<Extrusion> {
    check_thickness(thickness)?;
    let ring = mesh
        .faces
        .get(face.0)
        .ok_or(GeometryError::UnknownFace(face.0))?
        .clone();
    if thickness == 0.0 {
        return Ok(Extrusion::default());
    }

    let top: Vec<u32> = ring
        .iter()
        .map(|&index| {
            let [x, y, z] = mesh.positions[index as usize];
            mesh.push_vertex(Vec3::new(x, y, z + thickness))
        })
        .collect();

    let count = ring.len();
    let mut side_faces = Vec::with_capacity(count);
    for i in 0..count {
        let j = (i + 1) % count;
        side_faces.push(mesh.push_face(vec![ring[i], ring[j], top[j], top[i]]));
    }

    let cap_face = mesh.push_face(top);
    Ok(Extrusion {
        side_faces,
        cap_face: Some(cap_face),
    })
}

/// Extrude an open edge chain upward by `thickness`, producing a curtain
/// wall: an offset copy of the chain topology plus one side quad per original
/// edge. No caps are created.
pub fn extrude_chain(
    mesh: &mut MeshBuffer,
    chain: &EdgeChain,
    thickness: f32,
) -> GeometryResult<Extrusion> {
    check_thickness(thickness)?;
    let start = chain.start_vertex as usize;
    let count = chain.vertex_count as usize;
    if start + count > mesh.vertex_count() {
        return Err(GeometryError::ChainOutOfBounds);
    }
    if thickness == 0.0 {
        return Ok(Extrusion::default());
    }

    let top: Vec<u32> = (start..start + count)
        .map(|index| {
            let [x, y, z] = mesh.positions[index];
            mesh.push_vertex(Vec3::new(x, y, z + thickness))
        })
        .collect();

    let mut side_faces = Vec::with_capacity(count - 1);
    for i in 0..count - 1 {
        let base_a = (start + i) as u32;
        let base_b = (start + i + 1) as u32;
        mesh.edges.push([top[i], top[i + 1]]);
        side_faces.push(mesh.push_face(vec![base_a, base_b, top[i + 1], top[i]]));
    }

    Ok(Extrusion {
        side_faces,
        cap_face: None,
    })
}

fn check_thickness(thickness: f32) -> GeometryResult<()> {
    if !thickness.is_finite() {
        return Err(GeometryError::NonFiniteThickness);
    }
    if thickness < 0.0 {
        return Err(GeometryError::NegativeThickness(thickness));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{build_polygon, build_polyline};

    fn square_face(mesh: &mut MeshBuffer) -> FaceHandle {
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(2.0, 2.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        ];
        build_polygon(mesh, &points).unwrap()
    }

    #[test]
    fn face_extrusion_adds_n_vertices_n_sides_one_cap() {
        let mut mesh = MeshBuffer::new();
        let face = square_face(&mut mesh);
        let extrusion = extrude_face(&mut mesh, face, 3.0).unwrap();

        assert_eq!(mesh.vertex_count(), 8);
        // base + 4 sides + cap
        assert_eq!(mesh.face_count(), 6);
        assert_eq!(extrusion.side_faces.len(), 4);
        let cap = extrusion.cap_face.unwrap();
        for &index in mesh.face(cap) {
            assert_eq!(mesh.positions[index as usize][2], 3.0);
        }
    }

    #[test]
    fn zero_thickness_is_a_no_op() {
        let mut mesh = MeshBuffer::new();
        let face = square_face(&mut mesh);
        let before = mesh.clone();
        let extrusion = extrude_face(&mut mesh, face, 0.0).unwrap();

        assert_eq!(mesh, before);
        assert!(extrusion.side_faces.is_empty());
        assert!(extrusion.cap_face.is_none());
    }

    #[test]
    fn negative_thickness_is_rejected_before_mutation() {
        let mut mesh = MeshBuffer::new();
        let face = square_face(&mut mesh);
        let before = mesh.clone();

        let result = extrude_face(&mut mesh, face, -1.0);
        assert_eq!(result, Err(GeometryError::NegativeThickness(-1.0)));
        assert_eq!(mesh, before);
    }

    #[test]
    fn non_finite_thickness_is_rejected() {
        let mut mesh = MeshBuffer::new();
        let face = square_face(&mut mesh);
        assert_eq!(
            extrude_face(&mut mesh, face, f32::NAN),
            Err(GeometryError::NonFiniteThickness)
        );
    }

    #[test]
    fn chain_extrusion_builds_walls_without_caps() {
        let mut mesh = MeshBuffer::new();
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
        ];
        let chain = build_polyline(&mut mesh, &points).unwrap();
        let extrusion = extrude_chain(&mut mesh, &chain, 2.0).unwrap();

        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(extrusion.side_faces.len(), 2);
        assert!(extrusion.cap_face.is_none());
        // the offset chain topology is copied: 2 base edges + 2 top edges
        assert_eq!(mesh.edge_count(), 4);
    }

    #[test]
    fn base_elevation_is_preserved_under_extrusion() {
        let mut mesh = MeshBuffer::new();
        let points = [
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(1.0, 0.0, 3.0),
            Vec3::new(0.5, 1.0, 3.0),
        ];
        let face = build_polygon(&mut mesh, &points).unwrap();
        let extrusion = extrude_face(&mut mesh, face, 6.0).unwrap();

        let cap = extrusion.cap_face.unwrap();
        for &index in mesh.face(cap) {
            assert_eq!(mesh.positions[index as usize][2], 9.0);
        }
        for &index in mesh.face(face) {
            assert_eq!(mesh.positions[index as usize][2], 3.0);
        }
    }

    #[test]
    fn unknown_face_is_rejected() {
        let mut mesh = MeshBuffer::new();
        assert_eq!(
            extrude_face(&mut mesh, FaceHandle(0), 1.0),
            Err(GeometryError::UnknownFace(0))
        );
    }
}
