//! Strategy builders for the MST property suite.
//!
//! Generates fixtures across the five weight distributions with a seeded
//! [`SmallRng`], so proptest shrinks over the `(distribution, seed)` pair
//! rather than over raw edge lists.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for structural-invariant fixtures.
const MAX_VERTICES: usize = 16;
/// Maximum vertex count for brute-force minimality fixtures. The oracle
/// enumerates edge subsets, so both vertices and edges stay small.
const ORACLE_MAX_VERTICES: usize = 6;
/// Maximum edge count for brute-force minimality fixtures.
const ORACLE_MAX_EDGES: usize = 12;

/// Generates fixtures covering all five weight distributions.
pub(super) fn fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (0..WeightDistribution::ALL.len(), any::<u64>()).prop_map(|(index, seed)| {
        let distribution = WeightDistribution::ALL[index];
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, MAX_VERTICES, &mut rng)
    })
}

/// Generates small connected-or-not fixtures suitable for the brute-force
/// minimality oracle.
pub(super) fn oracle_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    any::<u64>().prop_map(|seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let vertex_count = rng.gen_range(MIN_VERTICES..=ORACLE_MAX_VERTICES);
        let mut pairs = all_pairs(vertex_count);
        // Keep a random subset small enough to enumerate.
        while pairs.len() > ORACLE_MAX_EDGES {
            let index = rng.gen_range(0..pairs.len());
            pairs.swap_remove(index);
        }
        let mut edges = Vec::with_capacity(pairs.len());
        for (u, v) in pairs {
            if rng.gen_bool(0.7) {
                edges.push((u, v, random_weight(&mut rng)));
            }
        }
        MstFixture {
            vertex_count,
            edges,
            distribution: WeightDistribution::Unique,
        }
    })
}

fn generate_fixture(
    distribution: WeightDistribution,
    max_vertices: usize,
    rng: &mut SmallRng,
) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let edges = match distribution {
        WeightDistribution::Unique => {
            probabilistic_edges(vertex_count, 0.5, rng, |rng, ordinal| {
                // Distinct integer base keeps weights unique.
                f64::from(ordinal) + rng.gen_range(0.0..0.5)
            })
        }
        WeightDistribution::ManyIdentical => {
            probabilistic_edges(vertex_count, 0.6, rng, |rng, _| {
                f64::from(rng.gen_range(1_u8..=3))
            })
        }
        WeightDistribution::Sparse => {
            probabilistic_edges(vertex_count, 0.15, rng, |rng, _| random_weight(rng))
        }
        WeightDistribution::Dense => {
            probabilistic_edges(vertex_count, 0.9, rng, |rng, _| random_weight(rng))
        }
        WeightDistribution::Disconnected => disconnected_edges(vertex_count, rng),
    };
    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

/// Adds each unique vertex pair with the given probability, weighting edges
/// via the supplied generator (which also receives the edge ordinal).
fn probabilistic_edges(
    vertex_count: usize,
    edge_probability: f64,
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng, u32) -> f64,
) -> Vec<(usize, usize, f64)> {
    let mut edges = Vec::new();
    let mut ordinal = 0_u32;
    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                edges.push((u, v, weight(rng, ordinal)));
                ordinal += 1;
            }
        }
    }
    edges
}

/// Splits the vertices into two halves and only generates edges within each
/// half, guaranteeing at least two components when both halves are occupied.
fn disconnected_edges(vertex_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize, f64)> {
    let split = (vertex_count / 2).max(1);
    let mut edges = Vec::new();
    for u in 0..split {
        for v in (u + 1)..split {
            if rng.gen_bool(0.6) {
                edges.push((u, v, random_weight(rng)));
            }
        }
    }
    for u in split..vertex_count {
        for v in (u + 1)..vertex_count {
            if rng.gen_bool(0.6) {
                edges.push((u, v, random_weight(rng)));
            }
        }
    }
    edges
}

fn random_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.1_f64..100.0)
}

fn all_pairs(vertex_count: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            pairs.push((u, v));
        }
    }
    pairs
}
