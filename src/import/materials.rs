// src/import/materials.rs
// Semantic material roles assigned to faces in isolated mode
// Maps each role to a display name and a linear-RGB preview color
// RELEVANT FILES:src/import/rules.rs,src/import/sink.rs

use crate::geometry::FaceHandle;

const ROOF_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
const WALL_COLOR: [f32; 3] = [1.0, 0.7, 0.0];
const WATER_COLOR: [f32; 3] = [0.0, 0.0, 1.0];
const NEUTRAL_COLOR: [f32; 3] = [0.5, 0.5, 0.5];

/// Semantic role of a face in an output entity.
///
/// `Natural` carries the raw tag value ("water", "wood", ...) so hosts can
/// key their own appearance tables off it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialRole {
    Roof,
    Wall,
    Natural(String),
}

impl MaterialRole {
    /// Stable name a host can use as a material slot key.
    pub fn name(&self) -> &str {
        match self {
            MaterialRole::Roof => "roof",
            MaterialRole::Wall => "wall",
            MaterialRole::Natural(value) => value,
        }
    }

    /// Preview color in linear RGB [0,1].
    pub fn color(&self) -> [f32; 3] {
        match self {
            MaterialRole::Roof => ROOF_COLOR,
            MaterialRole::Wall => WALL_COLOR,
            MaterialRole::Natural(value) if value == "water" => WATER_COLOR,
            MaterialRole::Natural(_) => NEUTRAL_COLOR,
        }
    }
}

/// Pairs a face with its semantic role. Honored by the isolated sink only;
/// the shared accumulator merges everything anonymously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialBinding {
    pub face: FaceHandle,
    pub role: MaterialRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_is_blue_other_naturals_neutral() {
        assert_eq!(MaterialRole::Natural("water".into()).color(), WATER_COLOR);
        assert_eq!(MaterialRole::Natural("wood".into()).color(), NEUTRAL_COLOR);
        assert_eq!(MaterialRole::Natural("wood".into()).name(), "wood");
    }

    #[test]
    fn building_roles_keep_their_palette() {
        assert_eq!(MaterialRole::Roof.color(), ROOF_COLOR);
        assert_eq!(MaterialRole::Wall.color(), WALL_COLOR);
        assert_eq!(MaterialRole::Wall.name(), "wall");
    }
}
