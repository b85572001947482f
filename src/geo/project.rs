// src/geo/project.rs
// Projection trait consumed by the import core, plus a local reference impl
// The core assumes nothing about the projection beyond per-run determinism
// RELEVANT FILES:src/geo/mod.rs,src/import/pipeline.rs,src/import/rules.rs

use glam::Vec2;

/// WGS84 equatorial radius in meters.
const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Maps a geographic coordinate to a planar point in scene units.
///
/// Injected per import run; the core only requires that the same geographic
/// point projects to the same planar point within one run. Any `Fn(f64, f64)
/// -> Vec2` closure qualifies.
pub trait Projector {
    fn project(&self, lat: f64, lon: f64) -> Vec2;
}

impl<F> Projector for F
where
    F: Fn(f64, f64) -> Vec2,
{
    fn project(&self, lat: f64, lon: f64) -> Vec2 {
        self(lat, lon)
    }
}

/// Equirectangular projection on a local tangent plane around a fixed origin.
///
/// Accurate enough for city-scale extents; ships as the reference projector
/// for tests and demos. Hosts with real CRS requirements inject their own
/// [`Projector`].
#[derive(Debug, Clone, Copy)]
pub struct LocalProjection {
    origin_lat: f64,
    origin_lon: f64,
    cos_origin_lat: f64,
}

impl LocalProjection {
    pub fn new(origin_lat: f64, origin_lon: f64) -> Self {
        Self {
            origin_lat,
            origin_lon,
            cos_origin_lat: origin_lat.to_radians().cos(),
        }
    }
}

impl Projector for LocalProjection {
    fn project(&self, lat: f64, lon: f64) -> Vec2 {
        let x = (lon - self.origin_lon).to_radians() * EARTH_RADIUS_M * self.cos_origin_lat;
        let y = (lat - self.origin_lat).to_radians() * EARTH_RADIUS_M;
        Vec2::new(x as f32, y as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_projects_to_zero() {
        let projection = LocalProjection::new(48.137, 11.575);
        let p = projection.project(48.137, 11.575);
        assert_eq!(p, Vec2::ZERO);
    }

    #[test]
    fn north_is_positive_y() {
        let projection = LocalProjection::new(0.0, 0.0);
        let p = projection.project(0.001, 0.0);
        assert!(p.y > 0.0);
        assert_eq!(p.x, 0.0);
        // one millidegree of latitude is roughly 111 m
        assert!((p.y - 111.3).abs() < 1.0);
    }

    #[test]
    fn closure_is_a_projector() {
        let flat = |lat: f64, lon: f64| Vec2::new(lon as f32, lat as f32);
        assert_eq!(flat.project(2.0, 3.0), Vec2::new(3.0, 2.0));
    }
}
