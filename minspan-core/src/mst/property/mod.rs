//! Property-based tests for the Kruskal minimum spanning forest.
//!
//! Verifies structural invariants (acyclicity, symmetry, edge count,
//! determinism) across randomly generated graph topologies and weight
//! distributions, and checks minimality against a brute-force oracle on
//! small graphs.

mod oracle;
mod strategies;
mod types;
