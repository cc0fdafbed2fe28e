//! Minimum spanning tree strategies.
//!
//! Both strategies rebuild their result from the store on every call; a
//! result is never patched incrementally.

use log::{info, warn};

use super::error::{GraphError, Result};
use super::store::{Edge, GraphStore, VertexId};
use super::union_find::DisjointSet;

/// Edges of a spanning tree (or forest) with their summed weight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MstResult {
	/// Accepted edges in the order they were chosen.
	pub edges: Vec<Edge>,
	/// Sum of the member edge weights.
	pub total_weight: f64,
}

impl MstResult {
	/// Builds a result, summing the weights of `edges`.
	pub fn from_edges(edges: Vec<Edge>) -> Self {
		let total_weight = edges.iter().map(|e| e.weight).sum();
		Self {
			edges,
			total_weight,
		}
	}

	/// Whether the result has no edges.
	pub fn is_empty(&self) -> bool {
		self.edges.is_empty()
	}
}

/// Which algorithm builds the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MstStrategy {
	/// Prim-style growth over the implicit complete graph of vertex
	/// positions.
	GeometricGrowth,
	/// Kruskal over the explicitly weighted edges.
	WeightedKruskal,
}

impl MstStrategy {
	/// Runs the strategy against `store`.
	pub fn compute(self, store: &GraphStore) -> Result<MstResult> {
		match self {
			MstStrategy::GeometricGrowth => geometric_growth(store),
			MstStrategy::WeightedKruskal => weighted_kruskal(store),
		}
	}

	/// The error reported when a graph with `vertex_count` vertices is too
	/// small for this strategy.
	pub fn too_small(self, vertex_count: usize) -> GraphError {
		match self {
			MstStrategy::GeometricGrowth => GraphError::InsufficientVertices {
				found: vertex_count,
			},
			MstStrategy::WeightedKruskal => GraphError::EmptyGraph,
		}
	}
}

/// Grows a tree from the first inserted vertex, always attaching the
/// unreached vertex closest to any reached one.
///
/// Edge weights are raw Euclidean distances. On equal distances the pair
/// seen first in reached-then-unreached order wins.
pub fn geometric_growth(store: &GraphStore) -> Result<MstResult> {
	let vertices = store.vertices();
	if vertices.len() < 2 {
		warn!("Not enough vertices to calculate MST ({})", vertices.len());
		return Err(GraphError::InsufficientVertices {
			found: vertices.len(),
		});
	}

	let mut reached = vec![VertexId(0)];
	let mut unreached: Vec<VertexId> = (1..vertices.len()).map(VertexId).collect();
	let mut edges = Vec::with_capacity(vertices.len() - 1);

	while !unreached.is_empty() {
		let mut record = f64::INFINITY;
		let mut best = None;

		for (ri, &r) in reached.iter().enumerate() {
			for (ui, &u) in unreached.iter().enumerate() {
				let dist = vertices[r.0].position.distance_to(&vertices[u.0].position);
				if dist < record || best.is_none() {
					record = dist;
					best = Some((ri, ui));
				}
			}
		}

		let Some((ri, ui)) = best else {
			break;
		};
		let chosen = unreached.remove(ui);
		edges.push(Edge {
			a: reached[ri],
			b: chosen,
			weight: record,
		});
		reached.push(chosen);
	}

	let result = MstResult::from_edges(edges);
	info!(
		"Geometric MST: {} edges, total {:.2}",
		result.edges.len(),
		result.total_weight
	);
	Ok(result)
}

/// Kruskal's algorithm over the stored edges.
///
/// Edges are stably sorted by weight, so equal weights keep insertion
/// order. A disconnected graph yields [`GraphError::GraphNotConnected`]
/// carrying the minimum spanning forest.
pub fn weighted_kruskal(store: &GraphStore) -> Result<MstResult> {
	if store.is_empty() || store.edge_count() == 0 {
		warn!(
			"Cannot run Kruskal on {} vertices and {} edges",
			store.vertex_count(),
			store.edge_count()
		);
		return Err(GraphError::EmptyGraph);
	}

	let mut sorted = store.edges().to_vec();
	sorted.sort_by(|x, y| x.weight.total_cmp(&y.weight));

	let mut sets = DisjointSet::new(store.vertex_count());
	let edges: Vec<Edge> = sorted
		.into_iter()
		.filter(|edge| sets.union(edge.a.0, edge.b.0))
		.collect();

	let result = MstResult::from_edges(edges);
	let required = store.vertex_count() - 1;
	if result.edges.len() < required {
		warn!(
			"Graph is not connected: {} of {} spanning edges found",
			result.edges.len(),
			required
		);
		return Err(GraphError::GraphNotConnected { forest: result });
	}

	info!(
		"Kruskal MST: {} edges, total {:.2}",
		result.edges.len(),
		result.total_weight
	);
	Ok(result)
}
