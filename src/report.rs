/// Human-readable rendering of the graph and analysis results
use std::io::{self, Write};

use crate::graph::{Graph, SpanningForest, TotalWeight};

/// Scalar results of analysing one graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub node_count: usize,
    pub edge_count: usize,
    pub connected: bool,
    pub component_count: usize,
    pub mst_weight: TotalWeight,
}

impl Summary {
    pub fn of(graph: &Graph) -> Self {
        Self::from_forest(graph, &graph.minimum_spanning_forest())
    }

    /// Summarise `graph` using a spanning forest already computed for it
    pub fn from_forest(graph: &Graph, forest: &SpanningForest<'_>) -> Self {
        Summary {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            connected: graph.is_connected(),
            component_count: forest.component_count,
            mst_weight: forest.total_weight,
        }
    }
}

/// Write one line per node: `A -> B(4) C(2) `
pub fn write_adjacency<W: Write>(out: &mut W, graph: &Graph) -> io::Result<()> {
    for node in graph.nodes() {
        write!(out, "{node} -> ")?;
        if let Some(neighbors) = graph.neighbors(node) {
            for (neighbor, weight) in neighbors {
                write!(out, "{neighbor}({weight}) ")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "Is the graph connected? {}", summary.connected)?;
    writeln!(out, "Total length of the MST: {}", summary.mst_weight)?;
    Ok(())
}

/// Write the selected spanning-forest edges, one per line: `C - D (1)`
pub fn write_forest_edges<W: Write>(out: &mut W, forest: &SpanningForest<'_>) -> io::Result<()> {
    writeln!(out, "MST edges ({}):", forest.edges.len())?;
    for edge in &forest.edges {
        writeln!(out, "{} - {} ({})", edge.source, edge.destination, edge.weight)?;
    }
    Ok(())
}
