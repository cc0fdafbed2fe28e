//! Layout and behaviour knobs for the canvas.

/// Canvas layout and recomputation settings.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasConfig {
	/// Drawing surface width in pixels.
	pub width: f64,
	/// Drawing surface height in pixels.
	pub height: f64,
	/// Width reserved for the control panel left of the surface.
	pub side_panel_width: f64,
	/// Margin around the drawing surface.
	pub padding: f64,
	/// Radius of a drawn vertex.
	pub vertex_radius: f64,
	/// Raw pixels per displayed distance unit.
	pub pixels_per_unit: f64,
	/// Distance between axis ticks in draw mode.
	pub tick_spacing: f64,
	/// Recompute the MST after every edit instead of waiting for the button.
	pub auto_recompute: bool,
}

impl Default for CanvasConfig {
	fn default() -> Self {
		Self {
			width: 800.0,
			height: 600.0,
			side_panel_width: 240.0,
			padding: 16.0,
			vertex_radius: 5.0,
			pixels_per_unit: 50.0,
			tick_spacing: 50.0,
			auto_recompute: false,
		}
	}
}
