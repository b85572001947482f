// src/osm/model.rs
// Immutable map-data model: node coordinates, ordered ways, string tags
// Exists to give the import rules a typed view of externally parsed map data
// RELEVANT FILES:src/osm/mod.rs,src/import/rules.rs,src/import/sink.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identifier shared by nodes and ways.
pub type OsmId = u64;

/// A single geographic point referenced by one or more ways.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: OsmId,
    pub lat: f64,
    pub lon: f64,
}

/// String key/value attributes attached to a way.
///
/// Keys are unique and unordered. Absence of a key is a valid, common state;
/// callers check presence explicitly rather than assuming defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(HashMap<String, String>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Tags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// An ordered sequence of node references with associated tags.
///
/// A closed way stores the duplicated first node at the end of the list;
/// [`Way::ring`] strips that duplicate for polygon construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Way {
    pub id: OsmId,
    pub nodes: Vec<OsmId>,
    pub tags: Tags,
}

impl Way {
    pub fn is_closed(&self) -> bool {
        self.nodes.len() >= 2 && self.nodes.first() == self.nodes.last()
    }

    /// Node list with the duplicated closing node removed.
    pub fn ring(&self) -> &[OsmId] {
        if self.is_closed() {
            &self.nodes[..self.nodes.len() - 1]
        } else {
            &self.nodes
        }
    }
}

/// Read access to the externally owned map-data store.
pub trait NodeSource {
    fn coords(&self, id: OsmId) -> Option<(f64, f64)>;
}

impl NodeSource for HashMap<OsmId, Node> {
    fn coords(&self, id: OsmId) -> Option<(f64, f64)> {
        self.get(&id).map(|node| (node.lat, node.lon))
    }
}

impl NodeSource for HashMap<OsmId, (f64, f64)> {
    fn coords(&self, id: OsmId) -> Option<(f64, f64)> {
        self.get(&id).copied()
    }
}
