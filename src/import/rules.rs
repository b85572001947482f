// src/import/rules.rs
// Tag-driven rule registry and the geometry each rule builds
// First-match evaluation order is fixed: Building, BuildingPart, Highway, Natural
// RELEVANT FILES:src/import/pipeline.rs,src/import/sink.rs,src/geometry/extrude.rs

use glam::Vec3;
use log::debug;

use crate::error::{ImportError, ImportResult};
use crate::geo::Projector;
use crate::geometry::{build_polygon, build_polyline, extrude_face, MeshBuffer};
use crate::osm::{parse_scalar, NodeSource, OsmId, Tags, Way};

use super::materials::{MaterialBinding, MaterialRole};
use super::options::{ImportOptions, MatchPolicy};

/// The geometry-building rules, one per recognized tag family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Building,
    BuildingPart,
    Highway,
    Natural,
}

impl RuleKind {
    /// Fixed evaluation order for first-match dispatch.
    pub const EVALUATION_ORDER: [RuleKind; 4] = [
        RuleKind::Building,
        RuleKind::BuildingPart,
        RuleKind::Highway,
        RuleKind::Natural,
    ];

    /// Whether this rule's predicate accepts the tag set.
    pub fn matches(self, tags: &Tags) -> bool {
        match self {
            RuleKind::Building => tags.contains("building"),
            RuleKind::BuildingPart => tags.contains("building:part"),
            RuleKind::Highway => tags.contains("highway"),
            RuleKind::Natural => tags.contains("natural"),
        }
    }
}

/// Evaluate the rule registry against a tag set.
///
/// Returns the first match alone under [`MatchPolicy::FirstMatch`], or every
/// match in evaluation order under [`MatchPolicy::AllMatches`]. An empty
/// result is the normal outcome for unrecognized tag combinations, not an
/// error.
pub fn classify(tags: &Tags, policy: MatchPolicy) -> Vec<RuleKind> {
    let mut matched = Vec::new();
    for kind in RuleKind::EVALUATION_ORDER {
        if kind.matches(tags) {
            matched.push(kind);
            if policy == MatchPolicy::FirstMatch {
                break;
            }
        }
    }
    matched
}

/// Collaborators a rule needs while building one way.
pub(crate) struct RuleContext<'a, N: NodeSource, P: Projector> {
    pub nodes: &'a N,
    pub projector: &'a P,
    pub options: &'a ImportOptions,
}

/// What a rule did with a way.
pub(crate) enum RuleOutcome {
    /// Geometry was committed to the buffer; bindings cover any faces with a
    /// semantic role.
    Built { bindings: Vec<MaterialBinding> },
    /// Below the rule's vertex minimum; benign, nothing committed.
    TooSmall,
}

/// Run one rule over one way, appending into `mesh`.
///
/// All inputs are checked before the first mutation: node lookup and scalar
/// derivation happen up front, so a failing way never leaves partial
/// geometry behind.
pub(crate) fn apply<N: NodeSource, P: Projector>(
    kind: RuleKind,
    way: &Way,
    ctx: &RuleContext<'_, N, P>,
    mesh: &mut MeshBuffer,
) -> ImportResult<RuleOutcome> {
    match kind {
        RuleKind::Building => build_building(way, ctx, mesh),
        RuleKind::BuildingPart => build_building_part(way, ctx, mesh),
        RuleKind::Highway => build_highway(way, ctx, mesh),
        RuleKind::Natural => build_natural(way, ctx, mesh),
    }
}

fn build_building<N: NodeSource, P: Projector>(
    way: &Way,
    ctx: &RuleContext<'_, N, P>,
    mesh: &mut MeshBuffer,
) -> ImportResult<RuleOutcome> {
    let ring = way.ring();
    if ring.len() < 3 {
        return Ok(RuleOutcome::TooSmall);
    }

    let thickness = parse_length_tag(&way.tags, "height", way.id)
        .unwrap_or(ctx.options.default_wall_thickness);
    let points = project_nodes(way.id, ring, 0.0, ctx)?;

    let face = build_polygon(mesh, &points)?;
    let mut bindings = Vec::new();
    if thickness > 0.0 {
        let extrusion = extrude_face(mesh, face, thickness)?;
        if let Some(cap) = extrusion.cap_face {
            bindings.push(MaterialBinding {
                face: cap,
                role: MaterialRole::Roof,
            });
        }
        for side in extrusion.side_faces {
            bindings.push(MaterialBinding {
                face: side,
                role: MaterialRole::Wall,
            });
        }
    } else {
        // flat building: the single face reads as its own roof
        bindings.push(MaterialBinding {
            face,
            role: MaterialRole::Roof,
        });
    }

    Ok(RuleOutcome::Built { bindings })
}

fn build_building_part<N: NodeSource, P: Projector>(
    way: &Way,
    ctx: &RuleContext<'_, N, P>,
    mesh: &mut MeshBuffer,
) -> ImportResult<RuleOutcome> {
    let ring = way.ring();
    if ring.len() < 3 {
        return Ok(RuleOutcome::TooSmall);
    }

    let min_height = parse_length_tag(&way.tags, "min_height", way.id).unwrap_or(0.0);
    let height = parse_length_tag(&way.tags, "height", way.id).unwrap_or(0.0);
    let thickness = height - min_height;
    if thickness < 0.0 {
        // malformed source data, surfaced rather than clamped
        return Err(ImportError::HeightBelowMinHeight {
            way: way.id,
            height,
            min_height,
        });
    }

    let points = project_nodes(way.id, ring, min_height, ctx)?;
    let face = build_polygon(mesh, &points)?;
    if thickness > 0.0 {
        extrude_face(mesh, face, thickness)?;
    }

    // building parts carry no role bindings
    Ok(RuleOutcome::Built {
        bindings: Vec::new(),
    })
}

fn build_highway<N: NodeSource, P: Projector>(
    way: &Way,
    ctx: &RuleContext<'_, N, P>,
    mesh: &mut MeshBuffer,
) -> ImportResult<RuleOutcome> {
    // open ways keep every node; closing-node dedup does not apply
    if way.nodes.len() < 2 {
        return Ok(RuleOutcome::TooSmall);
    }

    let points = project_nodes(way.id, &way.nodes, 0.0, ctx)?;
    build_polyline(mesh, &points)?;

    // no extrusion regardless of height tags
    Ok(RuleOutcome::Built {
        bindings: Vec::new(),
    })
}

fn build_natural<N: NodeSource, P: Projector>(
    way: &Way,
    ctx: &RuleContext<'_, N, P>,
    mesh: &mut MeshBuffer,
) -> ImportResult<RuleOutcome> {
    let ring = way.ring();
    // single-node naturals (trees etc.) fall through here as well
    if ring.len() < 3 {
        return Ok(RuleOutcome::TooSmall);
    }

    let points = project_nodes(way.id, ring, 0.0, ctx)?;
    let face = build_polygon(mesh, &points)?;

    let value = way.tags.get("natural").unwrap_or_default().to_string();
    Ok(RuleOutcome::Built {
        bindings: vec![MaterialBinding {
            face,
            role: MaterialRole::Natural(value),
        }],
    })
}

/// Look up and project every node before any geometry is committed.
fn project_nodes<N: NodeSource, P: Projector>(
    way: OsmId,
    ids: &[OsmId],
    elevation: f32,
    ctx: &RuleContext<'_, N, P>,
) -> ImportResult<Vec<Vec3>> {
    ids.iter()
        .map(|&id| {
            let (lat, lon) = ctx
                .nodes
                .coords(id)
                .ok_or(ImportError::MissingNode { way, node: id })?;
            let planar = ctx.projector.project(lat, lon);
            Ok(Vec3::new(planar.x, planar.y, elevation))
        })
        .collect()
}

/// Parse a length tag, treating malformed text as absent. Height attributes
/// are optional enrichments; a parse failure falls back to the rule's
/// default instead of failing the way.
fn parse_length_tag(tags: &Tags, key: &str, way: OsmId) -> Option<f32> {
    let text = tags.get(key)?;
    match parse_scalar(text) {
        Ok(scalar) => Some(scalar.meters),
        Err(err) => {
            debug!("way {way}: ignoring {key}: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> Tags {
        pairs.iter().copied().collect()
    }

    #[test]
    fn first_match_follows_evaluation_order() {
        let both = tags(&[("building", "yes"), ("natural", "water")]);
        assert_eq!(
            classify(&both, MatchPolicy::FirstMatch),
            vec![RuleKind::Building]
        );
    }

    #[test]
    fn all_matches_returns_every_rule() {
        let both = tags(&[("building", "yes"), ("natural", "water")]);
        assert_eq!(
            classify(&both, MatchPolicy::AllMatches),
            vec![RuleKind::Building, RuleKind::Natural]
        );
    }

    #[test]
    fn unknown_tags_match_nothing() {
        let other = tags(&[("amenity", "bench")]);
        assert!(classify(&other, MatchPolicy::FirstMatch).is_empty());
        assert!(classify(&other, MatchPolicy::AllMatches).is_empty());
    }

    #[test]
    fn building_part_predicate_is_distinct() {
        let part = tags(&[("building:part", "yes")]);
        assert_eq!(
            classify(&part, MatchPolicy::FirstMatch),
            vec![RuleKind::BuildingPart]
        );
        assert!(!RuleKind::Building.matches(&part));
    }
}
