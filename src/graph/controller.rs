//! Turns pointer, text and button input into graph edits.
//!
//! Raw input arrives as [`Event`]s. [`Context::transition`] validates an
//! event against the current context and yields the next context plus an
//! optional typed [`Command`]; [`Controller::handle`] applies the command to
//! the store and only then commits the new context, so an edit the store
//! rejects leaves both the store and the context as they were.

use log::{debug, info, warn};

use super::config::CanvasConfig;
use super::error::{GraphError, Result};
use super::mst::{MstResult, MstStrategy};
use super::store::GraphStore;
use super::units::{DisplayDistance, DisplayScale, DistanceUnit, Point, Surface, UserScale};

/// Which canvas variant the controller drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
	/// Click to place auto-labelled vertices; tree edges come from geometry.
	Draw,
	/// Typed vertex labels and typed weighted edges.
	Manual,
}

impl Mode {
	/// MST strategy used by this mode.
	pub fn strategy(self) -> MstStrategy {
		match self {
			Mode::Draw => MstStrategy::GeometricGrowth,
			Mode::Manual => MstStrategy::WeightedKruskal,
		}
	}
}

/// Controller states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
	/// Nothing has been placed yet.
	Idle,
	/// A click was rejected because no label was typed.
	AwaitingLabel,
	/// At least one vertex exists.
	GraphPopulated,
}

/// Raw input from the canvas and its controls.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
	/// Pointer pressed at coordinates relative to the canvas container.
	PointerDown {
		/// Container-relative x.
		x: f64,
		/// Container-relative y.
		y: f64,
	},
	/// The vertex label field changed.
	LabelInput(String),
	/// The edge field changed.
	EdgeInput(String),
	/// The scale field changed.
	ScaleInput(String),
	/// A distance unit was picked.
	UnitSelected(DistanceUnit),
	/// "Add Edge" pressed.
	AddEdgePressed,
	/// "Calculate MST" pressed.
	RecomputePressed,
	/// "Clear Graph" pressed.
	ClearPressed,
}

/// A validated edit for the graph store.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
	/// Place a vertex; `None` asks for an automatic label.
	AddVertex {
		/// Graph-space position.
		position: Point,
		/// Typed label.
		label: Option<String>,
	},
	/// Connect two labelled vertices.
	AddEdge(EdgeSpec),
	/// Rebuild the MST.
	Recompute,
	/// Drop every vertex, edge and the MST.
	Clear,
}

/// A parsed `<label1> <label2> <weight>` line.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeSpec {
	/// First endpoint label.
	pub from: String,
	/// Second endpoint label.
	pub to: String,
	/// Edge weight.
	pub weight: f64,
}

/// Parses edge text of exactly three whitespace-separated tokens.
pub fn parse_edge_spec(input: &str) -> Result<EdgeSpec> {
	let tokens: Vec<&str> = input.split_whitespace().collect();
	let [from, to, raw_weight] = tokens.as_slice() else {
		return Err(GraphError::MalformedEdgeSpec {
			input: input.to_owned(),
		});
	};

	let weight = raw_weight
		.parse::<f64>()
		.ok()
		.filter(|w| w.is_finite() && *w >= 0.0)
		.ok_or_else(|| GraphError::InvalidWeight {
			raw: raw_weight.to_string(),
		})?;

	Ok(EdgeSpec {
		from: from.to_string(),
		to: to.to_string(),
		weight,
	})
}

/// Everything the controller tracks besides the graph itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Context {
	/// Canvas variant.
	pub mode: Mode,
	/// Current state.
	pub state: ControllerState,
	/// Text of the vertex label field.
	pub pending_label: String,
	/// Text of the edge field.
	pub pending_edge: String,
	/// How distances are displayed.
	pub scale: DisplayScale,
}

/// Result of feeding one event to a [`Context`].
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
	/// Context to commit once the command (if any) has been applied.
	pub next: Context,
	/// The command to apply, or why the event was rejected.
	pub outcome: Result<Option<Command>>,
}

impl Context {
	/// A fresh context for `mode`.
	pub fn new(mode: Mode) -> Self {
		Self {
			mode,
			state: ControllerState::Idle,
			pending_label: String::new(),
			pending_edge: String::new(),
			scale: DisplayScale::default(),
		}
	}

	/// Validates `event` and computes the next context.
	///
	/// `populated` tells whether the store currently holds any vertex.
	pub fn transition(&self, event: Event, surface: &Surface, populated: bool) -> Transition {
		let mut next = self.clone();
		let outcome = match event {
			Event::PointerDown { x, y } => match surface.to_logical(x, y) {
				Err(err) => Err(err),
				Ok(position) => match self.mode {
					Mode::Draw => {
						next.state = ControllerState::GraphPopulated;
						Ok(Some(Command::AddVertex {
							position,
							label: None,
						}))
					}
					Mode::Manual if self.pending_label.trim().is_empty() => {
						next.state = ControllerState::AwaitingLabel;
						Err(GraphError::EmptyLabel)
					}
					Mode::Manual => {
						let label = self.pending_label.trim().to_owned();
						next.pending_label.clear();
						next.state = ControllerState::GraphPopulated;
						Ok(Some(Command::AddVertex {
							position,
							label: Some(label),
						}))
					}
				},
			},
			Event::LabelInput(text) => {
				if self.state == ControllerState::AwaitingLabel && !text.trim().is_empty() {
					next.state = resting_state(populated);
				}
				next.pending_label = text;
				Ok(None)
			}
			Event::EdgeInput(text) => {
				next.pending_edge = text;
				Ok(None)
			}
			Event::ScaleInput(text) => {
				if let Some(user_scale) = UserScale::parse(&text) {
					next.scale.user_scale = user_scale;
				}
				Ok(None)
			}
			Event::UnitSelected(unit) => {
				next.scale.unit = unit;
				Ok(None)
			}
			Event::AddEdgePressed => parse_edge_spec(&self.pending_edge).map(|spec| {
				next.pending_edge.clear();
				Some(Command::AddEdge(spec))
			}),
			Event::RecomputePressed if self.state == ControllerState::Idle => {
				Err(self.mode.strategy().too_small(0))
			}
			Event::RecomputePressed => Ok(Some(Command::Recompute)),
			Event::ClearPressed => {
				next.state = ControllerState::Idle;
				next.pending_label.clear();
				next.pending_edge.clear();
				Ok(Some(Command::Clear))
			}
		};
		Transition { next, outcome }
	}
}

fn resting_state(populated: bool) -> ControllerState {
	if populated {
		ControllerState::GraphPopulated
	} else {
		ControllerState::Idle
	}
}

/// Read-only view handed to the renderer.
#[derive(Clone, Copy, Debug)]
pub struct GraphSnapshot<'a> {
	/// Canvas variant.
	pub mode: Mode,
	/// Vertices and edges.
	pub store: &'a GraphStore,
	/// Latest MST result.
	pub mst: &'a MstResult,
	/// Distance display settings.
	pub scale: DisplayScale,
	/// Raw weight per displayed unit.
	pub pixels_per_unit: f64,
}

impl GraphSnapshot<'_> {
	/// Formats a raw weight with the current scale and unit.
	pub fn display(&self, raw: f64) -> DisplayDistance {
		self.scale.format(raw, self.pixels_per_unit)
	}
}

/// Owns the graph store and its MST, and applies input to both.
#[derive(Clone, Debug)]
pub struct Controller {
	context: Context,
	store: GraphStore,
	mst: MstResult,
	surface: Surface,
	pixels_per_unit: f64,
	auto_recompute: bool,
}

impl Controller {
	/// Creates an empty controller for `mode`.
	///
	/// Typed weights are already in user units, so only draw mode divides
	/// by the configured pixels per unit.
	pub fn new(mode: Mode, config: &CanvasConfig) -> Self {
		let pixels_per_unit = match mode {
			Mode::Draw => config.pixels_per_unit,
			Mode::Manual => 1.0,
		};
		Self {
			context: Context::new(mode),
			store: GraphStore::new(),
			mst: MstResult::default(),
			surface: Surface::from_config(config),
			pixels_per_unit,
			auto_recompute: config.auto_recompute,
		}
	}

	/// Handles one input event.
	///
	/// Returns the command that was applied, if any. A disconnected graph
	/// still publishes its spanning forest before the error is returned.
	pub fn handle(&mut self, event: Event) -> Result<Option<Command>> {
		let Transition { next, outcome } =
			self.context
				.transition(event, &self.surface, !self.store.is_empty());

		let command = match outcome {
			Ok(command) => command,
			Err(err) => {
				match &err {
					GraphError::OutOfBoundsInput { x, y } => {
						debug!("Ignoring pointer outside surface at ({}, {})", x, y)
					}
					_ => warn!("Rejected input: {}", err),
				}
				self.commit(next);
				return Err(err);
			}
		};

		let applied = match &command {
			Some(command) => self.apply(command),
			None => Ok(()),
		};
		match applied {
			Ok(()) | Err(GraphError::GraphNotConnected { .. }) => self.commit(next),
			Err(ref err) => warn!("Rejected {:?}: {}", command, err),
		}
		applied.map(|()| command)
	}

	fn commit(&mut self, next: Context) {
		if next.state != self.context.state {
			debug!("{:?} -> {:?}", self.context.state, next.state);
		}
		self.context = next;
	}

	fn apply(&mut self, command: &Command) -> Result<()> {
		match command {
			Command::AddVertex { position, label } => {
				self.store.add_vertex(*position, label.as_deref())?;
				self.after_edit();
			}
			Command::AddEdge(spec) => {
				self.store.add_edge(&spec.from, &spec.to, spec.weight)?;
				self.after_edit();
			}
			Command::Recompute => self.recompute()?,
			Command::Clear => {
				self.store.clear();
				self.mst = MstResult::default();
				info!("Graph cleared");
			}
		}
		Ok(())
	}

	/// Rebuilds the MST with the mode's strategy.
	///
	/// On [`GraphError::GraphNotConnected`] the forest becomes the published
	/// result. Other failures leave the current result untouched.
	pub fn recompute(&mut self) -> Result<()> {
		match self.context.mode.strategy().compute(&self.store) {
			Ok(result) => {
				self.mst = result;
				Ok(())
			}
			Err(GraphError::GraphNotConnected { forest }) => {
				self.mst = forest.clone();
				Err(GraphError::GraphNotConnected { forest })
			}
			Err(err) => Err(err),
		}
	}

	fn after_edit(&mut self) {
		if !self.auto_recompute {
			self.mst = MstResult::default();
			return;
		}
		self.mst = match self.context.mode.strategy().compute(&self.store) {
			Ok(result) => result,
			Err(GraphError::GraphNotConnected { forest }) => forest,
			Err(_) => MstResult::default(),
		};
	}

	/// Current context.
	pub fn context(&self) -> &Context {
		&self.context
	}

	/// Current state.
	pub fn state(&self) -> ControllerState {
		self.context.state
	}

	/// The graph store.
	pub fn store(&self) -> &GraphStore {
		&self.store
	}

	/// Latest MST result.
	pub fn mst(&self) -> &MstResult {
		&self.mst
	}

	/// Where the drawing surface sits inside the container.
	pub fn surface(&self) -> &Surface {
		&self.surface
	}

	/// A read-only view for rendering.
	pub fn snapshot(&self) -> GraphSnapshot<'_> {
		GraphSnapshot {
			mode: self.context.mode,
			store: &self.store,
			mst: &self.mst,
			scale: self.context.scale,
			pixels_per_unit: self.pixels_per_unit,
		}
	}
}
