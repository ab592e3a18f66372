//! Scale-free network generation and coverage analysis.
//!
//! Application-level consumer of the bounded samplers: grows a random
//! scale-free network by preferential attachment, summarizes its degree
//! distribution, and builds a greedy dominating set. Every random decision
//! goes through [`crate::random::sample_u64`], so the graph doubles as an
//! end-to-end exercise of the sampling core.
//!
//! # Algorithm
//!
//! Barabási–Albert preferential attachment: start from a small clique, then
//! attach each new vertex to `k` existing vertices chosen with probability
//! proportional to their degree. Degree-proportional choice falls out of
//! sampling a uniform *edge* and then a uniform endpoint of it, with no
//! bookkeeping of per-vertex weights. The resulting degree distribution
//! follows a power law `P(d) ~ d⁻³`.
//!
//! Reference: Barabási & Albert (1999), "Emergence of Scaling in Random
//! Networks", *Science* 286(5439), pp. 509–512.

use std::collections::{BTreeMap, HashSet};

use rand::Rng;

use crate::random::sample_u64;

/// Error type for invalid graph parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Parameters violate generator constraints.
    InvalidParameters(String),
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidParameters(msg) => {
                write!(f, "invalid graph parameters: {msg}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// An undirected edge between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub u: u64,
    pub v: u64,
}

/// One selection made by [`greedy_cover`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverEntry {
    /// The selected vertex.
    pub vertex: u64,
    /// Number of uncovered edge endpoints this selection covered, counted
    /// per edge (parallel edges count once each).
    pub covered: u64,
}

/// Generates a random scale-free network with `n` vertices and `k` edges
/// per added vertex.
///
/// Seeds a `(k+1)`-clique on vertices `0..=k`, then attaches each vertex
/// `k+1..n` to `k` distinct earlier vertices by picking a uniform existing
/// edge and a uniform endpoint of it, redrawing on duplicates. The returned
/// edge list has exactly `k(k+1)/2 + (n−k−1)·k` entries.
///
/// # Errors
/// Returns `Err` if `k == 0` or `n < k + 1` (the seed clique would not fit).
///
/// # Examples
/// ```
/// use u_sample::graph::scale_free_network;
/// use u_sample::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let edges = scale_free_network(50, 3, &mut rng).unwrap();
/// assert_eq!(edges.len(), 6 + 46 * 3);
/// assert!(edges.iter().all(|e| e.u < 50 && e.v < 50));
/// ```
pub fn scale_free_network<R: Rng>(n: u64, k: u64, rng: &mut R) -> Result<Vec<Edge>, GraphError> {
    if k == 0 || n < k + 1 {
        return Err(GraphError::InvalidParameters(format!(
            "scale-free network requires k ≥ 1 and n ≥ k + 1, got n={n}, k={k}"
        )));
    }

    let clique_edges = (k * (k + 1) / 2) as usize;
    let growth_edges = ((n - k - 1) * k) as usize;
    let mut edges = Vec::with_capacity(clique_edges + growth_edges);

    // Seed clique on vertices 0..=k.
    for u in 0..=k {
        for v in (u + 1)..=k {
            edges.push(Edge { u, v });
        }
    }

    // Attach each new vertex to k distinct existing vertices, selected with
    // probability proportional to degree: a uniform edge draw followed by a
    // uniform endpoint draw.
    for u in (k + 1)..n {
        let existing = edges.len() as u64;
        let mut attached: HashSet<u64> = HashSet::with_capacity(k as usize);
        while (attached.len() as u64) < k {
            let edge = edges[pick(existing, rng) as usize];
            let v = if pick(2, rng) == 0 { edge.u } else { edge.v };
            if attached.insert(v) {
                edges.push(Edge { u, v });
            }
        }
    }

    Ok(edges)
}

/// Bounded draw with a bound the caller has already proven positive.
#[inline]
fn pick<R: Rng>(n: u64, rng: &mut R) -> u64 {
    sample_u64(n, rng).expect("bound is positive")
}

/// Returns `(degree, vertex count)` pairs for the degree histogram,
/// ascending by degree, omitting empty buckets.
///
/// Vertices without edges count toward the degree-0 bucket. Endpoints must
/// be below `n`.
///
/// # Examples
/// ```
/// use u_sample::graph::{degree_frequencies, Edge};
///
/// // A triangle plus one isolated vertex.
/// let edges = [
///     Edge { u: 0, v: 1 },
///     Edge { u: 1, v: 2 },
///     Edge { u: 0, v: 2 },
/// ];
/// assert_eq!(degree_frequencies(4, &edges), vec![(0, 1), (2, 3)]);
/// ```
pub fn degree_frequencies(n: u64, edges: &[Edge]) -> Vec<(u64, u64)> {
    let mut degree_of = vec![0_u64; n as usize];
    for edge in edges {
        debug_assert!(edge.u < n && edge.v < n);
        degree_of[edge.u as usize] += 1;
        degree_of[edge.v as usize] += 1;
    }
    let mut buckets: BTreeMap<u64, u64> = BTreeMap::new();
    for degree in degree_of {
        *buckets.entry(degree).or_insert(0) += 1;
    }
    buckets.into_iter().collect()
}

/// Builds a dominating set greedily: repeatedly selects the vertex covering
/// the most currently uncovered edge endpoints until every endpoint is
/// covered.
///
/// Ties break toward the smallest vertex id, so the result is deterministic
/// for a given edge list. Entries are sorted by covered count descending,
/// then by vertex id. Isolated vertices do not appear in any edge and are
/// ignored.
pub fn greedy_cover(edges: &[Edge]) -> Vec<CoverEntry> {
    let mut covered: HashSet<u64> = HashSet::new();
    let mut selections: Vec<CoverEntry> = Vec::new();

    loop {
        // For every edge with an uncovered endpoint, credit the opposite
        // endpoint as a candidate that would cover it.
        let mut gain: BTreeMap<u64, u64> = BTreeMap::new();
        for edge in edges {
            let u_covered = covered.contains(&edge.u);
            let v_covered = covered.contains(&edge.v);
            if !u_covered {
                *gain.entry(edge.v).or_insert(0) += 1;
            }
            if !v_covered {
                *gain.entry(edge.u).or_insert(0) += 1;
            }
        }

        // Ascending iteration + strict improvement: smallest id wins ties.
        let mut best: Option<(u64, u64)> = None;
        for (&vertex, &g) in &gain {
            if best.map_or(true, |(_, best_gain)| g > best_gain) {
                best = Some((vertex, g));
            }
        }
        let (vertex, g) = match best {
            Some(pair) => pair,
            None => break,
        };

        selections.push(CoverEntry { vertex, covered: g });
        covered.insert(vertex);
        for edge in edges {
            if edge.u == vertex {
                covered.insert(edge.v);
            }
            if edge.v == vertex {
                covered.insert(edge.u);
            }
        }
    }

    selections.sort_by(|a, b| b.covered.cmp(&a.covered).then(a.vertex.cmp(&b.vertex)));
    selections
}

// ============================================================================
// Tests
// ============================================================================
