//! Dense weighted, undirected graph storage.
//!
//! A [`WeightedGraph`] stores a symmetric weight function over vertex pairs
//! as the lower triangle of its adjacency matrix, including the diagonal, so
//! the weights appear in slot order `(0, 0), (1, 0), (1, 1), (2, 0), ...`.
//! This gives O(1) edge access at O(n²) space, a deliberate density trade-off
//! that is not suited to very large sparse graphs.

use crate::error::{Error, Result};

/// A vertex index in `[0, vertex_count)`.
pub type Vertex = usize;

/// An edge weight.
pub type Weight = f64;

/// Sentinel weight meaning "no edge".
///
/// Storing this value removes an edge; it is never a legitimate weight.
pub const NO_EDGE: Weight = f64::INFINITY;

/// A single weighted, undirected edge in canonical form (`u <= v`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    u: Vertex,
    v: Vertex,
    weight: Weight,
}

impl Edge {
    /// Creates an edge, canonicalising the endpoints to `u <= v`.
    #[must_use]
    pub const fn new(u: Vertex, v: Vertex, weight: Weight) -> Self {
        if u <= v {
            Self { u, v, weight }
        } else {
            Self { u: v, v: u, weight }
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn u(&self) -> Vertex { self.u }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v(&self) -> Vertex { self.v }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

impl Eq for Edge {}

/// Edges order ascending by `(weight, u, v)`.
///
/// Weights compare via [`f64::total_cmp`]; the `(u, v)` tail makes ordering
/// among equal-weight edges deterministic.
impl Ord for Edge {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.u.cmp(&other.u))
            .then_with(|| self.v.cmp(&other.v))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Returns the number of weight slots for `k` vertices; equivalently, the
/// slot index of the `k`th triangle row.
const fn triangular(k: usize) -> usize {
    k * (k + 1) / 2
}

/// A weighted, undirected graph over a fixed set of vertices.
///
/// # Examples
///
/// ```
/// use minspan_core::WeightedGraph;
///
/// let mut graph = WeightedGraph::new(3)?;
/// graph.set_edge(0, 1, 2.5)?;
/// assert_eq!(graph.edge(1, 0)?, 2.5);
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), minspan_core::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedGraph {
    vertex_count: usize,
    weights: Vec<Weight>,
}

impl WeightedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] when the triangular capacity overflows
    /// `usize` or the weight buffer cannot be reserved.
    pub fn new(vertex_count: usize) -> Result<Self> {
        let capacity = vertex_count
            .checked_add(1)
            .and_then(|rows| vertex_count.checked_mul(rows))
            .map(|product| product / 2)
            .ok_or(Error::OutOfMemory {
                requested: usize::MAX,
            })?;

        let mut weights = Vec::new();
        weights
            .try_reserve_exact(capacity)
            .map_err(|_| Error::OutOfMemory {
                requested: capacity,
            })?;
        weights.resize(capacity, NO_EDGE);

        Ok(Self {
            vertex_count,
            weights,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    fn check_vertex(&self, vertex: Vertex) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(Error::VertexOutOfBounds {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Returns the triangle slot holding the weight of `{u, v}`.
    fn slot(u: Vertex, v: Vertex) -> usize {
        if v > u {
            triangular(v) + u
        } else {
            triangular(u) + v
        }
    }

    /// Sets the weight of the edge between `u` and `v` in both orientations.
    ///
    /// Storing [`NO_EDGE`] removes the edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfBounds`] for an out-of-range endpoint and
    /// [`Error::NonFiniteWeight`] when the weight is NaN or negative
    /// infinity; only the positive-infinity sentinel is a legal non-finite
    /// value.
    pub fn set_edge(&mut self, u: Vertex, v: Vertex, weight: Weight) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if !weight.is_finite() && weight != NO_EDGE {
            return Err(Error::NonFiniteWeight {
                u: u.min(v),
                v: u.max(v),
            });
        }
        self.weights[Self::slot(u, v)] = weight;
        Ok(())
    }

    /// Removes the edge between `u` and `v`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfBounds`] for an out-of-range endpoint.
    pub fn remove_edge(&mut self, u: Vertex, v: Vertex) -> Result<()> {
        self.set_edge(u, v, NO_EDGE)
    }

    /// Returns the weight of the edge between `u` and `v`, or [`NO_EDGE`]
    /// when there is no such edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfBounds`] for an out-of-range endpoint.
    pub fn edge(&self, u: Vertex, v: Vertex) -> Result<Weight> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.weights[Self::slot(u, v)])
    }

    /// Returns `true` when an edge exists between `u` and `v`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfBounds`] for an out-of-range endpoint.
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> Result<bool> {
        Ok(self.edge(u, v)? != NO_EDGE)
    }

    /// Returns the degree of `vertex` (self-loops count once).
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfBounds`] for an out-of-range vertex.
    pub fn neighbor_count(&self, vertex: Vertex) -> Result<usize> {
        self.check_vertex(vertex)?;
        let count = (0..self.vertex_count)
            .filter(|&u| self.weights[Self::slot(u, vertex)] != NO_EDGE)
            .count();
        Ok(count)
    }

    /// Returns the neighbours of `vertex` in ascending vertex order.
    ///
    /// The result is an owned, dynamically sized vector, so no neighbours
    /// are ever silently dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfBounds`] for an out-of-range vertex.
    pub fn neighbors(&self, vertex: Vertex) -> Result<Vec<Vertex>> {
        self.check_vertex(vertex)?;
        let neighbors = (0..self.vertex_count)
            .filter(|&u| self.weights[Self::slot(u, vertex)] != NO_EDGE)
            .collect();
        Ok(neighbors)
    }

    /// Returns the number of edges, counting each unordered pair once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w != NO_EDGE).count()
    }

    /// Returns every edge `(u, v, w)` with `u <= v` and a finite weight, in
    /// ascending lexicographic `(u, v)` order.
    ///
    /// The result is an owned, dynamically sized vector, so no edges are
    /// ever silently dropped.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for u in 0..self.vertex_count {
            for v in u..self.vertex_count {
                let weight = self.weights[Self::slot(u, v)];
                if weight != NO_EDGE {
                    edges.push(Edge::new(u, v, weight));
                }
            }
        }
        edges
    }
}
