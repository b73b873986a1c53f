//! Shared fixture types for the MST property suite.

use crate::WeightedGraph;

/// Weight distributions used to stress different aspects of the algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum WeightDistribution {
    /// Distinct weights; the MST is unique.
    Unique,
    /// Many identical weights; stresses the deterministic tie-break.
    ManyIdentical,
    /// Few edges relative to the vertex count.
    Sparse,
    /// Most vertex pairs connected.
    Dense,
    /// Deliberately split into at least two components.
    Disconnected,
}

impl WeightDistribution {
    pub(super) const ALL: [Self; 5] = [
        Self::Unique,
        Self::ManyIdentical,
        Self::Sparse,
        Self::Dense,
        Self::Disconnected,
    ];
}

/// A generated input graph together with its generation parameters.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize, f64)>,
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Materialises the fixture as a [`WeightedGraph`].
    pub(super) fn graph(&self) -> WeightedGraph {
        let mut graph =
            WeightedGraph::new(self.vertex_count).expect("fixture allocation must succeed");
        for &(u, v, w) in &self.edges {
            graph.set_edge(u, v, w).expect("fixture endpoints must be valid");
        }
        graph
    }
}
