//! Graph model, MST engine and input controller.
//!
//! Nothing in here touches the browser; the canvas component drives it
//! through [`Controller`] and draws from [`GraphSnapshot`].

pub mod config;
pub mod controller;
pub mod error;
pub mod mst;
pub mod store;
pub mod union_find;
pub mod units;

pub use config::CanvasConfig;
pub use controller::{
	Command, Context, Controller, ControllerState, EdgeSpec, Event, GraphSnapshot, Mode,
	parse_edge_spec,
};
pub use error::{GraphError, Result};
pub use mst::{MstResult, MstStrategy, geometric_growth, weighted_kruskal};
pub use store::{Edge, GraphStore, Vertex, VertexId};
pub use units::{DisplayDistance, DisplayScale, DistanceUnit, Point, Surface, UserScale};
