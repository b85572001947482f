// src/import/sink.rs
// Output sinks: one shared accumulator, or one named entity per way
// Rules build against the same GeometrySink interface in either mode
// RELEVANT FILES:src/import/pipeline.rs,src/import/materials.rs,src/geometry/mod.rs

use log::debug;

use crate::geometry::MeshBuffer;
use crate::osm::{OsmId, Tags, Way};

use super::materials::MaterialBinding;

/// A finished, independently named piece of scene content.
///
/// Produced once per way (per matching rule) in isolated mode; never in
/// shared mode, where ways merge anonymously into one buffer.
#[derive(Debug, Clone)]
pub struct OutputEntity {
    pub name: String,
    pub way_id: OsmId,
    pub mesh: MeshBuffer,
    /// Source tags, copied verbatim.
    pub tags: Tags,
    pub materials: Vec<MaterialBinding>,
}

/// Host scene collaborator. Takes ownership of each emitted entity.
pub trait SceneSink {
    fn emit(&mut self, entity: OutputEntity);
}

/// Vec-backed [`SceneSink`] for tests, demos, and simple hosts.
#[derive(Debug, Default)]
pub struct SceneCollector {
    pub entities: Vec<OutputEntity>,
}

impl SceneCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SceneSink for SceneCollector {
    fn emit(&mut self, entity: OutputEntity) {
        self.entities.push(entity);
    }
}

/// Capability interface the rules build against.
///
/// `begin` hands out the buffer for the current way; `finish` commits
/// whatever the rule built. The two implementations below decide what those
/// words mean, so rules never branch on the output mode.
pub trait GeometrySink {
    fn begin(&mut self, way: &Way) -> &mut MeshBuffer;
    fn finish(&mut self, way: &Way, bindings: Vec<MaterialBinding>);
}

/// Append-only accumulator for shared (single-mesh) mode.
///
/// One buffer lives for the whole run; names, tags, and role bindings are
/// dropped, and every way becomes indistinguishable geometry in one combined
/// surface.
#[derive(Debug, Default)]
pub struct SharedSink {
    mesh: MeshBuffer,
}

impl SharedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mesh(&self) -> &MeshBuffer {
        &self.mesh
    }

    pub fn into_mesh(self) -> MeshBuffer {
        self.mesh
    }
}

impl GeometrySink for SharedSink {
    fn begin(&mut self, _way: &Way) -> &mut MeshBuffer {
        &mut self.mesh
    }

    fn finish(&mut self, way: &Way, bindings: Vec<MaterialBinding>) {
        if !bindings.is_empty() {
            debug!("way {}: {} role bindings dropped in shared mode", way.id, bindings.len());
        }
    }
}

/// Entity-scoped sink for isolated mode.
///
/// `begin` resets a scratch buffer; `finish` derives the entity name, copies
/// the tags, attaches the role bindings, and hands the result to the scene
/// collaborator.
#[derive(Debug)]
pub struct IsolatedSink<'a, S: SceneSink> {
    scene: &'a mut S,
    scratch: MeshBuffer,
}

impl<'a, S: SceneSink> IsolatedSink<'a, S> {
    pub fn new(scene: &'a mut S) -> Self {
        Self {
            scene,
            scratch: MeshBuffer::new(),
        }
    }
}

impl<S: SceneSink> GeometrySink for IsolatedSink<'_, S> {
    fn begin(&mut self, _way: &Way) -> &mut MeshBuffer {
        self.scratch = MeshBuffer::new();
        &mut self.scratch
    }

    fn finish(&mut self, way: &Way, bindings: Vec<MaterialBinding>) {
        let mesh = std::mem::take(&mut self.scratch);
        self.scene.emit(OutputEntity {
            name: entity_name(way),
            way_id: way.id,
            mesh,
            tags: way.tags.clone(),
            materials: bindings,
        });
    }
}

/// Compose the display name of an output entity.
///
/// Street plus house number wins when both are tagged, then a plain `name`
/// tag, then the way id rendered as text.
pub fn entity_name(way: &Way) -> String {
    let tags = &way.tags;
    if let (Some(street), Some(number)) = (tags.get("addr:street"), tags.get("addr:housenumber")) {
        return format!("{street}, {number}");
    }
    if let Some(name) = tags.get("name") {
        return name.to_string();
    }
    way.id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn way_with(tags: Tags) -> Way {
        Way {
            id: 42,
            nodes: vec![1, 2, 3, 1],
            tags,
        }
    }

    #[test]
    fn address_pair_wins_over_name() {
        let way = way_with(
            [
                ("addr:street", "Sendlinger Str."),
                ("addr:housenumber", "12"),
                ("name", "Corner Bakery"),
            ]
            .into_iter()
            .collect(),
        );
        assert_eq!(entity_name(&way), "Sendlinger Str., 12");
    }

    #[test]
    fn name_tag_wins_over_id() {
        let way = way_with([("name", "Corner Bakery")].into_iter().collect());
        assert_eq!(entity_name(&way), "Corner Bakery");
    }

    #[test]
    fn street_alone_is_not_enough() {
        let way = way_with([("addr:street", "Sendlinger Str.")].into_iter().collect());
        assert_eq!(entity_name(&way), "42");
    }

    #[test]
    fn shared_sink_keeps_one_buffer_across_ways() {
        let mut sink = SharedSink::new();
        let way = way_with(Tags::new());
        sink.begin(&way).positions.push([0.0, 0.0, 0.0]);
        sink.finish(&way, Vec::new());
        sink.begin(&way).positions.push([1.0, 0.0, 0.0]);
        sink.finish(&way, Vec::new());
        assert_eq!(sink.mesh().vertex_count(), 2);
    }

    #[test]
    fn isolated_sink_emits_fresh_buffers() {
        let mut scene = SceneCollector::new();
        let mut sink = IsolatedSink::new(&mut scene);
        let way = way_with([("name", "Pond")].into_iter().collect());

        sink.begin(&way).positions.push([0.0, 0.0, 0.0]);
        sink.finish(&way, Vec::new());
        sink.begin(&way).positions.push([1.0, 0.0, 0.0]);
        sink.finish(&way, Vec::new());

        assert_eq!(scene.entities.len(), 2);
        assert_eq!(scene.entities[0].name, "Pond");
        assert_eq!(scene.entities[0].mesh.vertex_count(), 1);
        assert_eq!(scene.entities[1].mesh.vertex_count(), 1);
        assert_eq!(scene.entities[0].tags.get("name"), Some("Pond"));
    }
}
