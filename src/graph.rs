/// Undirected weighted graph with connectivity check and Kruskal minimum spanning forest
///
/// Adjacency is a map of maps (node -> neighbor -> weight). Both levels keep insertion
/// order, so traversal start, edge enumeration and rendering are deterministic.
use indexmap::IndexMap;
use std::collections::HashSet;

use crate::disjoint_set::DisjointSet;

/// Edge weight (non-negative)
pub type Weight = u32;

/// Sum of edge weights. Wider than `Weight` so a forest total cannot overflow.
pub type TotalWeight = u64;

/// One (source, destination, weight) triple as supplied by an edge source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source: String,
    pub destination: String,
    pub weight: Weight,
}

impl EdgeRecord {
    pub fn new(source: impl Into<String>, destination: impl Into<String>, weight: Weight) -> Self {
        EdgeRecord {
            source: source.into(),
            destination: destination.into(),
            weight,
        }
    }
}

/// Directed view of one adjacency entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    pub source: &'a str,
    pub destination: &'a str,
    pub weight: Weight,
}

/// Edges chosen by Kruskal, in selection order, plus their total weight
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanningForest<'a> {
    pub edges: Vec<Edge<'a>>,
    pub total_weight: TotalWeight,
    /// Number of trees in the forest (connected components of the graph)
    pub component_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: IndexMap<String, IndexMap<String, Weight>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an undirected edge. Both directions are written together; a repeated
    /// pair takes the latest weight.
    pub fn add_edge(&mut self, source: impl Into<String>, destination: impl Into<String>, weight: Weight) {
        let source = source.into();
        let destination = destination.into();

        self.adjacency
            .entry(source.clone())
            .or_default()
            .insert(destination.clone(), weight);
        self.adjacency
            .entry(destination)
            .or_default()
            .insert(source, weight);
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges (self-loops count once)
    pub fn edge_count(&self) -> usize {
        let mut directed = 0;
        let mut loops = 0;
        for (node, neighbors) in &self.adjacency {
            directed += neighbors.len();
            if neighbors.contains_key(node) {
                loops += 1;
            }
        }
        (directed - loops) / 2 + loops
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains_node(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    pub fn weight(&self, source: &str, destination: &str) -> Option<Weight> {
        self.adjacency.get(source)?.get(destination).copied()
    }

    /// Nodes in first-seen order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn neighbors(&self, label: &str) -> Option<impl Iterator<Item = (&str, Weight)>> {
        self.adjacency
            .get(label)
            .map(|neighbors| neighbors.iter().map(|(n, &w)| (n.as_str(), w)))
    }

    /// Every directed adjacency entry. Each undirected edge appears once per direction.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.adjacency.iter().flat_map(|(source, neighbors)| {
            neighbors.iter().map(move |(destination, &weight)| Edge {
                source: source.as_str(),
                destination: destination.as_str(),
                weight,
            })
        })
    }

    /// Iterative depth-first traversal from `start`, marking into `visited`
    fn visit_from<'a>(&'a self, start: &'a str, visited: &mut HashSet<&'a str>) -> Vec<&'a str> {
        let mut reached = Vec::new();
        let mut stack = vec![start];

        while let Some(node) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            reached.push(node);

            if let Some(neighbors) = self.adjacency.get(node) {
                for neighbor in neighbors.keys() {
                    if !visited.contains(neighbor.as_str()) {
                        stack.push(neighbor.as_str());
                    }
                }
            }
        }

        reached
    }

    /// True iff every node is reachable from the first node. An empty graph is connected.
    pub fn is_connected(&self) -> bool {
        let mut visited = HashSet::with_capacity(self.adjacency.len());
        if let Some(start) = self.adjacency.keys().next() {
            self.visit_from(start, &mut visited);
        }
        visited.len() == self.adjacency.len()
    }

    /// Connected components, each listed in traversal order
    pub fn connected_components(&self) -> Vec<Vec<&str>> {
        let mut visited = HashSet::with_capacity(self.adjacency.len());
        let mut components = Vec::new();

        for node in self.adjacency.keys() {
            if !visited.contains(node.as_str()) {
                components.push(self.visit_from(node, &mut visited));
            }
        }

        components
    }

    /// Kruskal's algorithm over all directed entries.
    ///
    /// The edge list holds every undirected edge twice and is not deduplicated: once the
    /// first copy unions its endpoints, the second resolves to a shared root and is
    /// skipped. On a disconnected graph the result is a minimum spanning forest.
    pub fn minimum_spanning_forest(&self) -> SpanningForest<'_> {
        let mut edges: Vec<Edge<'_>> = self.edges().collect();
        // Stable sort: ties keep enumeration order
        edges.sort_by_key(|edge| edge.weight);

        let mut sets: DisjointSet<&str> = DisjointSet::new();
        let mut forest = SpanningForest::default();

        for edge in edges {
            let root_source = sets.find(&edge.source);
            let root_destination = sets.find(&edge.destination);

            if root_source != root_destination {
                sets.union(&root_source, &root_destination);
                forest.total_weight += TotalWeight::from(edge.weight);
                forest.edges.push(edge);
            }
        }

        // Every node has at least one adjacency entry, so every node was registered above
        forest.component_count = sets.set_count();

        log::debug!(
            "Spanning forest: {} edges selected over {} nodes in {} components, total weight {}",
            forest.edges.len(),
            self.adjacency.len(),
            forest.component_count,
            forest.total_weight
        );

        forest
    }

    /// Total weight of the minimum spanning forest (0 for an edgeless graph)
    pub fn construct_mst(&self) -> TotalWeight {
        self.minimum_spanning_forest().total_weight
    }
}

impl Extend<EdgeRecord> for Graph {
    fn extend<I: IntoIterator<Item = EdgeRecord>>(&mut self, records: I) {
        for record in records {
            self.add_edge(record.source, record.destination, record.weight);
        }
    }
}

impl FromIterator<EdgeRecord> for Graph {
    fn from_iter<I: IntoIterator<Item = EdgeRecord>>(records: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(records);
        graph
    }
}
