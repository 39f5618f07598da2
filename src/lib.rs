// Library exports for shipgraph
pub mod disjoint_set;
pub mod edge_list;
pub mod graph;
pub mod report;

pub use disjoint_set::DisjointSet;
pub use edge_list::{read_edge_list, ReadOptions};
pub use graph::{Edge, EdgeRecord, Graph, SpanningForest, TotalWeight, Weight};
