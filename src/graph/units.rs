//! Conversions between pointer space, graph space and displayed distances.
//!
//! Graph-space coordinates are measured in surface pixels from the top-left
//! corner of the drawing surface. Distances stay in raw pixels inside the
//! engine; only [`DisplayScale`] turns them into user units.

use std::fmt;

use super::config::CanvasConfig;
use super::error::{GraphError, Result};

/// A position in graph space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal offset from the surface's left edge.
	pub x: f64,
	/// Vertical offset from the surface's top edge.
	pub y: f64,
}

impl Point {
	/// Creates a point.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance to `other`.
	pub fn distance_to(&self, other: &Point) -> f64 {
		(other.x - self.x).hypot(other.y - self.y)
	}

	/// Point halfway between `self` and `other`.
	pub fn midpoint(&self, other: &Point) -> Point {
		Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
	}
}

/// Placement of the drawing surface inside the element that receives
/// pointer events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
	/// Offset of the surface's left edge (side panel plus padding).
	pub left: f64,
	/// Offset of the surface's top edge (padding).
	pub top: f64,
	/// Surface width.
	pub width: f64,
	/// Surface height.
	pub height: f64,
}

impl Surface {
	/// Derives the surface placement from the canvas layout.
	pub fn from_config(config: &CanvasConfig) -> Self {
		Self {
			left: config.side_panel_width + config.padding,
			top: config.padding,
			width: config.width,
			height: config.height,
		}
	}

	/// Maps raw pointer coordinates to graph space.
	///
	/// Both surface edges are inclusive; anything else is rejected with
	/// [`GraphError::OutOfBoundsInput`].
	pub fn to_logical(&self, screen_x: f64, screen_y: f64) -> Result<Point> {
		let (x, y) = (screen_x - self.left, screen_y - self.top);
		if (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y) {
			Ok(Point::new(x, y))
		} else {
			Err(GraphError::OutOfBoundsInput {
				x: screen_x,
				y: screen_y,
			})
		}
	}

	/// Inverse of [`Surface::to_logical`].
	pub fn to_screen(&self, point: Point) -> (f64, f64) {
		(point.x + self.left, point.y + self.top)
	}
}

/// Converts a raw pixel distance into user units.
pub fn scaled_distance(raw_distance: f64, pixels_per_unit: f64, user_scale: UserScale) -> f64 {
	raw_distance / pixels_per_unit * user_scale.get() as f64
}

/// Unit label shown next to distances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DistanceUnit {
	/// Kilometers.
	Kilometers,
	/// Meters.
	#[default]
	Meters,
	/// Centimeters.
	Centimeters,
}

impl DistanceUnit {
	/// Every unit, in the order offered to the user.
	pub const ALL: [DistanceUnit; 3] = [
		DistanceUnit::Kilometers,
		DistanceUnit::Meters,
		DistanceUnit::Centimeters,
	];

	/// Short symbol, e.g. `"km"`.
	pub fn symbol(self) -> &'static str {
		match self {
			DistanceUnit::Kilometers => "km",
			DistanceUnit::Meters => "m",
			DistanceUnit::Centimeters => "cm",
		}
	}

	/// Looks a unit up by its symbol.
	pub fn from_symbol(symbol: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|unit| unit.symbol() == symbol)
	}
}

impl fmt::Display for DistanceUnit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.symbol())
	}
}

/// User-chosen multiplier, always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserScale(u32);

impl UserScale {
	/// Creates a scale, clamping zero up to 1.
	pub fn new(value: u32) -> Self {
		Self(value.max(1))
	}

	/// Parses the scale input field. Non-numeric text yields `None`.
	pub fn parse(raw: &str) -> Option<Self> {
		raw.trim().parse::<u32>().ok().map(Self::new)
	}

	/// The multiplier.
	pub fn get(self) -> u32 {
		self.0
	}
}

impl Default for UserScale {
	fn default() -> Self {
		Self(1)
	}
}

/// Scale factor and unit applied to every displayed distance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplayScale {
	/// Multiplier applied after pixel-to-unit conversion.
	pub user_scale: UserScale,
	/// Unit label.
	pub unit: DistanceUnit,
}

impl DisplayScale {
	/// Converts a raw engine distance for display.
	pub fn format(&self, raw_distance: f64, pixels_per_unit: f64) -> DisplayDistance {
		DisplayDistance {
			value: scaled_distance(raw_distance, pixels_per_unit, self.user_scale),
			unit: self.unit,
		}
	}
}

/// A distance ready to print, e.g. `6.00 m`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayDistance {
	/// Scaled value.
	pub value: f64,
	/// Unit label.
	pub unit: DistanceUnit,
}

impl fmt::Display for DisplayDistance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:.2} {}", self.value, self.unit)
	}
}
