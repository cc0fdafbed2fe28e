//! Failures raised while editing the graph or computing its spanning tree.

use thiserror::Error;

use super::mst::MstResult;

/// Errors produced by the graph store, the MST engine and the input parser.
///
/// Every variant leaves the store in its last valid state, so callers can
/// surface the message and let the user retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
	/// A vertex with this label already exists.
	#[error("Invalid or duplicate vertex name: \"{label}\" is already in use")]
	DuplicateLabel {
		/// The rejected label.
		label: String,
	},

	/// The vertex label is empty or only whitespace.
	#[error("Please enter a label for the new vertex")]
	EmptyLabel,

	/// An edge refers to a label that is not in the store.
	#[error("Invalid vertices or weight: no vertex named \"{label}\"")]
	UnknownVertex {
		/// The label that could not be resolved.
		label: String,
	},

	/// The edge weight is not a finite, non-negative number.
	#[error("Invalid vertices or weight: \"{raw}\" is not a valid weight")]
	InvalidWeight {
		/// The weight text as typed.
		raw: String,
	},

	/// The edge text does not have the `<label1> <label2> <weight>` shape.
	#[error("Invalid input format \"{input}\". Use 'A B weight'")]
	MalformedEdgeSpec {
		/// The edge text as typed.
		input: String,
	},

	/// There are no vertices or no edges to build a tree from.
	#[error("No edges available to calculate MST")]
	EmptyGraph,

	/// Kruskal could not span every vertex; `forest` holds the spanning
	/// forest of the connected components.
	#[error(
		"Graph is not connected: the spanning forest has {} edges (total weight {:.2})",
		.forest.edges.len(),
		.forest.total_weight
	)]
	GraphNotConnected {
		/// Minimum spanning forest of the components that were found.
		forest: MstResult,
	},

	/// Geometric growth needs at least two vertices.
	#[error("Not enough vertices to calculate MST: need at least 2, found {found}")]
	InsufficientVertices {
		/// Number of vertices in the store.
		found: usize,
	},

	/// A pointer event landed outside the drawing surface.
	#[error("Pointer at ({x}, {y}) is outside the drawing surface")]
	OutOfBoundsInput {
		/// Raw pointer x.
		x: f64,
		/// Raw pointer y.
		y: f64,
	},
}

impl GraphError {
	/// Whether the failure should be shown to the user.
	///
	/// Out-of-bounds clicks are dropped quietly.
	pub fn is_user_visible(&self) -> bool {
		!matches!(self, GraphError::OutOfBoundsInput { .. })
	}
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_out_of_bounds_is_silent() {
		let err = GraphError::OutOfBoundsInput { x: -1.0, y: 4.0 };
		assert!(!err.is_user_visible());
		assert!(GraphError::EmptyLabel.is_user_visible());
		assert!(GraphError::EmptyGraph.is_user_visible());
	}

	#[test]
	fn test_not_connected_message_mentions_forest() {
		let err = GraphError::GraphNotConnected {
			forest: MstResult::default(),
		};
		assert_eq!(
			err.to_string(),
			"Graph is not connected: the spanning forest has 0 edges (total weight 0.00)"
		);
	}
}
