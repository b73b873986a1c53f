//! Minspan core library.
//!
//! Computes minimum spanning forests of weighted, undirected graphs with
//! Kruskal's algorithm. Three pieces cooperate: [`WeightedGraph`] stores a
//! symmetric weight function in compact triangular form, [`DisjointSet`]
//! tracks component membership with union-by-rank and path compression, and
//! [`minimum_spanning_forest`] runs the greedy edge selection.
//!
//! The library is in-memory and single-threaded. Shared borrows keep an
//! input graph stable for the duration of a computation; independent
//! computations over distinct graphs are free to run concurrently since
//! each allocates private working structures.
//!
//! # Examples
//!
//! ```
//! use minspan_core::{WeightedGraph, minimum_spanning_forest};
//!
//! let mut graph = WeightedGraph::new(4)?;
//! graph.set_edge(0, 1, 1.0)?;
//! graph.set_edge(1, 2, 2.0)?;
//! graph.set_edge(2, 3, 3.0)?;
//! graph.set_edge(0, 3, 4.0)?;
//!
//! let forest = minimum_spanning_forest(&graph)?;
//! assert_eq!(forest.edge_count(), 3);
//! assert!(!forest.has_edge(0, 3)?);
//! # Ok::<(), minspan_core::Error>(())
//! ```

mod error;
mod graph;
mod mst;
mod union_find;

pub use crate::{
    error::{Error, ErrorCode, Result},
    graph::{Edge, NO_EDGE, Vertex, Weight, WeightedGraph},
    mst::minimum_spanning_forest,
    union_find::DisjointSet,
};
