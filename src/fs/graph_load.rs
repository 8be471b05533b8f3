use std::{fs::File, io::BufReader, path::Path};

use hashbrown::HashMap;
use serde::Deserialize;

use crate::{
    error::{GraphError, GraphResult},
    search::{AdjacencyMap, AirportNetwork, VertexGraph, VertexId},
};

#[derive(Debug, Deserialize)]
pub struct VertexEntry {
    /// Name other entries use to point at this vertex.
    pub id: String,
    pub value: String,
    #[serde(default)]
    pub neighbors: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AirportEntry {
    pub code: String,
    pub name: String,
    /// Codes of the airports reachable by a direct flight.
    #[serde(default)]
    pub routes: Vec<String>,
}

/// On-disk description of a graph, as found in a JSON file.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GraphFile {
    Vertices { vertices: Vec<VertexEntry> },
    Airports { airports: Vec<AirportEntry> },
    Adjacency { edges: HashMap<String, Vec<String>> },
}

/// A vertex graph whose vertices can be looked up by the name they had in the file.
#[derive(Debug)]
pub struct NamedVertices {
    pub graph: VertexGraph<String>,
    ids: HashMap<String, VertexId>,
}

impl NamedVertices {
    pub fn id(&self, name: &str) -> Option<VertexId> {
        self.ids.get(name).copied()
    }

    /// Like [`id`](Self::id), but a missing name is an error.
    pub fn require(&self, name: &str) -> GraphResult<VertexId> {
        self.id(name)
            .ok_or_else(|| GraphError::UnknownVertex(name.to_string()))
    }
}

#[derive(Debug)]
pub enum LoadedGraph {
    Vertices(NamedVertices),
    Airports(AirportNetwork),
    Adjacency(AdjacencyMap<String>),
}

impl LoadedGraph {
    pub fn kind(&self) -> &'static str {
        match self {
            LoadedGraph::Vertices(_) => "vertex",
            LoadedGraph::Airports(_) => "airport",
            LoadedGraph::Adjacency(_) => "adjacency",
        }
    }
}

impl GraphFile {
    /// Builds the in-memory graph, checking that every reference resolves.
    pub fn resolve(self) -> GraphResult<LoadedGraph> {
        match self {
            GraphFile::Vertices { vertices } => {
                resolve_vertices(vertices).map(LoadedGraph::Vertices)
            }
            GraphFile::Airports { airports } => {
                resolve_airports(airports).map(LoadedGraph::Airports)
            }
            GraphFile::Adjacency { edges } => {
                Ok(LoadedGraph::Adjacency(edges.into_iter().collect()))
            }
        }
    }
}

fn resolve_vertices(entries: Vec<VertexEntry>) -> GraphResult<NamedVertices> {
    let mut graph = VertexGraph::new();
    let mut ids = HashMap::with_capacity(entries.len());

    // first pass declares every vertex so that edges may point forward
    let mut pending = Vec::with_capacity(entries.len());
    for entry in entries {
        if ids.contains_key(&entry.id) {
            return Err(GraphError::DuplicateVertex(entry.id));
        }
        let id = graph.add_vertex(entry.value);
        ids.insert(entry.id, id);
        pending.push((id, entry.neighbors));
    }

    for (from, neighbors) in pending {
        for name in neighbors {
            let to = *ids.get(&name).ok_or(GraphError::UnknownVertex(name))?;
            graph.add_edge(from, to);
        }
    }

    Ok(NamedVertices { graph, ids })
}

fn resolve_airports(entries: Vec<AirportEntry>) -> GraphResult<AirportNetwork> {
    let mut network = AirportNetwork::new();

    let mut pending = Vec::with_capacity(entries.len());
    for entry in entries {
        let id = network.add_airport(entry.name, entry.code)?;
        pending.push((id, entry.routes));
    }

    for (from, routes) in pending {
        for code in routes {
            let to = network
                .find(&code)
                .ok_or(GraphError::UnknownAirport(code))?;
            network.add_route(from, to);
        }
    }

    Ok(network)
}

/// Parses and resolves a graph description held in memory.
pub fn parse_graph(json: &str) -> GraphResult<LoadedGraph> {
    serde_json::from_str::<GraphFile>(json)?.resolve()
}

/// Reads, parses and resolves the graph description stored at `path`.
pub fn load_graph(path: &Path) -> GraphResult<LoadedGraph> {
    let reader = BufReader::new(File::open(path)?);
    let graph = serde_json::from_reader::<_, GraphFile>(reader)?.resolve()?;

    tracing::info!(path = %path.display(), kind = graph.kind(), "graph loaded");
    Ok(graph)
}
