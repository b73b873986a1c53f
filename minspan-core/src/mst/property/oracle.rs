//! Brute-force minimality oracle for small graphs.
//!
//! Enumerates every edge subset of the input, keeps those that are acyclic
//! and induce the same component partition as the input (i.e. the spanning
//! forests), and returns the minimum total weight among them. Exponential
//! in the edge count, so callers keep fixtures small.

use crate::{DisjointSet, WeightedGraph};

/// Canonical component labelling: vertices share a label iff they share a
/// component. Labels are assigned in order of first occurrence so two
/// labellings compare equal exactly when the partitions match.
fn partition_labels(vertex_count: usize, edges: &[(usize, usize, f64)]) -> Vec<usize> {
    let mut sets = DisjointSet::new(vertex_count).expect("oracle allocation must succeed");
    for &(u, v, _) in edges {
        let _ = sets.union(u, v).expect("oracle endpoints must be valid");
    }

    let mut labels = Vec::with_capacity(vertex_count);
    let mut seen_roots = Vec::new();
    for vertex in 0..vertex_count {
        let root = sets.find(vertex).expect("oracle vertex must be valid");
        let label = seen_roots
            .iter()
            .position(|&r| r == root)
            .unwrap_or_else(|| {
                seen_roots.push(root);
                seen_roots.len() - 1
            });
        labels.push(label);
    }
    labels
}

/// Returns `true` when the edge subset contains no cycle.
fn is_acyclic(vertex_count: usize, edges: &[(usize, usize, f64)]) -> bool {
    let mut sets = DisjointSet::new(vertex_count).expect("oracle allocation must succeed");
    edges
        .iter()
        .all(|&(u, v, _)| sets.union(u, v).expect("oracle endpoints must be valid"))
}

/// Returns the minimum total weight over all spanning forests of `graph`.
///
/// Every graph has at least one spanning forest (the edgeless graph is
/// spanned by the empty subset), so a finite minimum always exists.
pub(super) fn brute_force_minimum_weight(graph: &WeightedGraph) -> f64 {
    let vertex_count = graph.vertex_count();
    let edges: Vec<_> = graph
        .edges()
        .iter()
        .map(|edge| (edge.u(), edge.v(), edge.weight()))
        .collect();
    let target_partition = partition_labels(vertex_count, &edges);

    assert!(
        edges.len() <= 20,
        "brute-force oracle cannot enumerate {} edges",
        edges.len()
    );

    let mut best = f64::INFINITY;
    for mask in 0_u32..(1_u32 << edges.len()) {
        let subset: Vec<_> = edges
            .iter()
            .enumerate()
            .filter(|&(index, _)| mask & (1 << index) != 0)
            .map(|(_, &edge)| edge)
            .collect();

        if !is_acyclic(vertex_count, &subset) {
            continue;
        }
        if partition_labels(vertex_count, &subset) != target_partition {
            continue;
        }

        let weight: f64 = subset.iter().map(|&(_, _, w)| w).sum();
        if weight < best {
            best = weight;
        }
    }

    best
}
