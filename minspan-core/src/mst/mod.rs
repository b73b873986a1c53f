//! Minimum spanning forest construction by Kruskal's algorithm.
//!
//! Harvests every finite edge from the input graph, sorts ascending by
//! weight, and greedily selects edges whose endpoints a fresh
//! [`DisjointSet`] reports as still separated. By the cut property, the
//! cheapest edge crossing any still-separated pair of components is always
//! safe to add, so the accumulated weight is minimum over all spanning
//! forests of the input.

use tracing::{debug, info, instrument};

use crate::{
    error::Result,
    graph::WeightedGraph,
    union_find::DisjointSet,
};

/// Computes a minimum spanning forest of `graph`.
///
/// The result is a new graph over the same vertices holding only the
/// selected edges: a single tree when the input is connected, otherwise one
/// tree per connected component, with exactly `n − k` edges for `k` input
/// components. Self-loops never appear in the result, whatever their
/// weight, because a union of a vertex with itself reports no change.
///
/// Equal-weight edges are tie-broken deterministically by ascending
/// `(u, v)`, so repeated runs over an unmodified graph select the same
/// edges.
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) when the
/// working disjoint set or the result graph cannot be allocated. No partial
/// output is returned on failure; whichever structure was already allocated
/// is dropped.
///
/// # Examples
///
/// ```
/// use minspan_core::{WeightedGraph, minimum_spanning_forest};
///
/// let mut graph = WeightedGraph::new(3)?;
/// graph.set_edge(0, 1, 1.0)?;
/// graph.set_edge(1, 2, 2.0)?;
/// graph.set_edge(0, 2, 5.0)?;
///
/// let forest = minimum_spanning_forest(&graph)?;
/// assert_eq!(forest.edge_count(), 2);
/// assert!(!forest.has_edge(0, 2)?);
/// # Ok::<(), minspan_core::Error>(())
/// ```
#[instrument(skip(graph), fields(vertex_count = graph.vertex_count()))]
pub fn minimum_spanning_forest(graph: &WeightedGraph) -> Result<WeightedGraph> {
    let mut edges = graph.edges();
    edges.sort_unstable();
    debug!(candidate_edges = edges.len(), "harvested and sorted edges");

    let mut components = DisjointSet::new(graph.vertex_count())?;
    let mut forest = WeightedGraph::new(graph.vertex_count())?;

    let mut total_weight = 0.0_f64;
    for edge in &edges {
        if components.union(edge.u(), edge.v())? {
            forest.set_edge(edge.u(), edge.v(), edge.weight())?;
            total_weight += edge.weight();
        }
    }

    let selected = forest.edge_count();
    info!(
        selected,
        rejected = edges.len() - selected,
        total_weight,
        "minimum spanning forest complete"
    );
    Ok(forest)
}


#[cfg(test)]
mod property;
