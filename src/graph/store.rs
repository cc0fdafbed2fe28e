//! The vertex and edge store every other component reads from.

use log::info;

use super::error::{GraphError, Result};
use super::units::Point;

/// Index of a vertex in its [`GraphStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// A labelled point.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
	/// Unique label.
	pub label: String,
	/// Graph-space position.
	pub position: Point,
}

/// An undirected weighted edge between two stored vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	/// First endpoint.
	pub a: VertexId,
	/// Second endpoint.
	pub b: VertexId,
	/// Non-negative weight.
	pub weight: f64,
}

/// Append-only vertex and edge lists, cleared only as a whole.
#[derive(Clone, Debug, Default)]
pub struct GraphStore {
	vertices: Vec<Vertex>,
	edges: Vec<Edge>,
}

impl GraphStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a vertex at `position`.
	///
	/// With no label the next unused sequential label (`A`, `B`, … `Z`,
	/// `AA`, …) starting from the current vertex count is assigned, so
	/// automatic labels never collide with typed ones.
	pub fn add_vertex(&mut self, position: Point, label: Option<&str>) -> Result<VertexId> {
		let label = match label {
			Some(label) => {
				let label = label.trim();
				if label.is_empty() {
					return Err(GraphError::EmptyLabel);
				}
				if self.find(label).is_some() {
					return Err(GraphError::DuplicateLabel {
						label: label.to_owned(),
					});
				}
				label.to_owned()
			}
			None => self.next_auto_label(),
		};

		let id = VertexId(self.vertices.len());
		info!(
			"Added vertex {} at ({:.1}, {:.1})",
			label, position.x, position.y
		);
		self.vertices.push(Vertex { label, position });
		Ok(id)
	}

	/// Adds an edge between two labelled vertices.
	pub fn add_edge(&mut self, label1: &str, label2: &str, weight: f64) -> Result<Edge> {
		let a = self.resolve(label1)?;
		let b = self.resolve(label2)?;
		if !weight.is_finite() || weight < 0.0 {
			return Err(GraphError::InvalidWeight {
				raw: weight.to_string(),
			});
		}

		let edge = Edge { a, b, weight };
		info!("Added edge {}-{} with weight {}", label1, label2, weight);
		self.edges.push(edge);
		Ok(edge)
	}

	/// Removes every vertex and edge.
	pub fn clear(&mut self) {
		self.vertices.clear();
		self.edges.clear();
	}

	/// Looks a vertex up by label.
	pub fn find(&self, label: &str) -> Option<VertexId> {
		self.vertices
			.iter()
			.position(|v| v.label == label)
			.map(VertexId)
	}

	/// The vertex behind `id`.
	pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
		self.vertices.get(id.0)
	}

	/// Both endpoints of `edge`.
	pub fn endpoints(&self, edge: &Edge) -> Option<(&Vertex, &Vertex)> {
		Some((self.vertex(edge.a)?, self.vertex(edge.b)?))
	}

	/// All vertices in insertion order.
	pub fn vertices(&self) -> &[Vertex] {
		&self.vertices
	}

	/// All edges in insertion order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Number of vertices.
	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Whether the store holds no vertices.
	pub fn is_empty(&self) -> bool {
		self.vertices.is_empty()
	}

	fn resolve(&self, label: &str) -> Result<VertexId> {
		self.find(label).ok_or_else(|| GraphError::UnknownVertex {
			label: label.to_owned(),
		})
	}

	fn next_auto_label(&self) -> String {
		(self.vertices.len()..)
			.map(sequential_label)
			.find(|label| self.find(label).is_none())
			.unwrap_or_default()
	}
}

/// Spreadsheet-style label for `index`: `A`…`Z`, `AA`, `AB`, ….
pub fn sequential_label(index: usize) -> String {
	let mut n = index + 1;
	let mut letters = Vec::new();
	while n > 0 {
		n -= 1;
		letters.push(b'A' + (n % 26) as u8);
		n /= 26;
	}
	letters.iter().rev().map(|&b| b as char).collect()
}
