// demos/city_blocks.rs
// Runs the import over a hand-built block: two buildings, a road, a pond.
// RELEVANT FILES:src/import/pipeline.rs,src/import/sink.rs

use std::collections::HashMap;

use anyhow::Result;
use waymesh::{
    import_ways, ImportOptions, LocalProjection, Node, OsmId, SceneCollector, Tags, Way,
};

fn node(id: OsmId, lat: f64, lon: f64) -> (OsmId, Node) {
    (id, Node { id, lat, lon })
}

fn tags(pairs: &[(&str, &str)]) -> Tags {
    pairs.iter().copied().collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let nodes: HashMap<OsmId, Node> = [
        node(1, 48.1371, 11.5753),
        node(2, 48.1371, 11.5757),
        node(3, 48.1374, 11.5757),
        node(4, 48.1374, 11.5753),
        node(5, 48.1375, 11.5760),
        node(6, 48.1377, 11.5762),
        node(7, 48.1379, 11.5765),
        node(8, 48.1380, 11.5750),
        node(9, 48.1380, 11.5754),
        node(10, 48.1382, 11.5754),
        node(11, 48.1382, 11.5750),
    ]
    .into();

    let ways = vec![
        Way {
            id: 100,
            nodes: vec![1, 2, 3, 4, 1],
            tags: tags(&[
                ("building", "yes"),
                ("height", "22m"),
                ("addr:street", "Marienplatz"),
                ("addr:housenumber", "8"),
            ]),
        },
        Way {
            id: 101,
            nodes: vec![1, 2, 3, 1],
            tags: tags(&[("building:part", "yes"), ("min_height", "22"), ("height", "30")]),
        },
        Way {
            id: 102,
            nodes: vec![5, 6, 7],
            tags: tags(&[("highway", "residential"), ("name", "Dienerstr.")]),
        },
        Way {
            id: 103,
            nodes: vec![8, 9, 10, 11, 8],
            tags: tags(&[("natural", "water"), ("name", "Fischbrunnen")]),
        },
    ];

    let projection = LocalProjection::new(48.1375, 11.5755);

    // isolated mode: one named entity per way
    let mut scene = SceneCollector::new();
    let report = import_ways(
        &ways,
        &nodes,
        &projection,
        &ImportOptions::default(),
        &mut scene,
    );
    println!("isolated: {:?}", report.stats);
    for entity in &scene.entities {
        println!(
            "  {:24} verts={:3} faces={:3} edges={:3} roles={:?}",
            entity.name,
            entity.mesh.vertex_count(),
            entity.mesh.face_count(),
            entity.mesh.edge_count(),
            entity
                .materials
                .iter()
                .map(|b| b.role.name().to_string())
                .collect::<Vec<_>>(),
        );
    }

    // shared mode: one combined buffer, no entities
    let shared = ImportOptions {
        single_mesh: true,
        ..ImportOptions::default()
    };
    let report = import_ways(&ways, &nodes, &projection, &shared, &mut scene);
    let mesh = report.mesh.expect("shared mode returns the combined mesh");
    println!(
        "shared: verts={} faces={} edges={}",
        mesh.vertex_count(),
        mesh.face_count(),
        mesh.edge_count()
    );

    Ok(())
}
