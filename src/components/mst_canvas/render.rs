use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::graph::{CanvasConfig, Edge, GraphSnapshot, Mode, Point};

const BACKGROUND: &str = "rgb(51, 51, 51)";
const AXIS: &str = "rgb(200, 200, 200)";
const TEXT: &str = "white";
const LABEL: &str = "rgb(255, 255, 0)";
const VERTEX: &str = "white";
const EDGE: &str = "rgb(100, 100, 100)";
const MST_EDGE: &str = "rgb(255, 0, 0)";

const TICK_HALF: f64 = 5.0;
const LABEL_OFFSET: f64 = 10.0;

/// Where a text's anchor point sits relative to the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
	TopLeft,
	TopCenter,
	Center,
	CenterRight,
}

impl TextAnchor {
	fn align(self) -> &'static str {
		match self {
			TextAnchor::TopLeft => "left",
			TextAnchor::TopCenter | TextAnchor::Center => "center",
			TextAnchor::CenterRight => "right",
		}
	}

	fn baseline(self) -> &'static str {
		match self {
			TextAnchor::TopLeft | TextAnchor::TopCenter => "top",
			TextAnchor::Center | TextAnchor::CenterRight => "middle",
		}
	}
}

/// Primitive draw calls the renderer issues.
pub trait DrawSurface {
	fn fill_background(&self, width: f64, height: f64, color: &str);
	fn line(&self, from: Point, to: Point, color: &str, width: f64);
	fn dot(&self, center: Point, radius: f64, color: &str);
	fn text(&self, text: &str, at: Point, size: f64, color: &str, anchor: TextAnchor);
}

impl DrawSurface for CanvasRenderingContext2d {
	fn fill_background(&self, width: f64, height: f64, color: &str) {
		self.set_fill_style_str(color);
		self.fill_rect(0.0, 0.0, width, height);
	}

	fn line(&self, from: Point, to: Point, color: &str, width: f64) {
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.x, from.y);
		self.line_to(to.x, to.y);
		self.stroke();
	}

	fn dot(&self, center: Point, radius: f64, color: &str) {
		self.begin_path();
		let _ = self.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
		self.set_fill_style_str(color);
		self.fill();
	}

	fn text(&self, text: &str, at: Point, size: f64, color: &str, anchor: TextAnchor) {
		self.set_fill_style_str(color);
		self.set_font(&format!("{}px sans-serif", size));
		self.set_text_align(anchor.align());
		self.set_text_baseline(anchor.baseline());
		let _ = self.fill_text(text, at.x, at.y);
	}
}

pub fn render(snapshot: &GraphSnapshot<'_>, config: &CanvasConfig, surface: &impl DrawSurface) {
	surface.fill_background(config.width, config.height, BACKGROUND);
	if snapshot.mode == Mode::Draw {
		draw_axes(config, surface);
	}
	for edge in snapshot.store.edges() {
		draw_edge(snapshot, edge, EDGE, 1.0, TEXT, surface);
	}
	for edge in &snapshot.mst.edges {
		draw_edge(snapshot, edge, MST_EDGE, 2.0, LABEL, surface);
	}
	draw_vertices(snapshot, config, surface);

	if !snapshot.mst.is_empty() {
		let total = snapshot.display(snapshot.mst.total_weight);
		surface.text(
			&format!("Total MST Weight: {}", total),
			Point::new(10.0, 10.0),
			16.0,
			TEXT,
			TextAnchor::TopLeft,
		);
	}
}

fn draw_axes(config: &CanvasConfig, surface: &impl DrawSurface) {
	let (width, height) = (config.width, config.height);
	let (cx, cy) = (width / 2.0, height / 2.0);
	surface.line(Point::new(0.0, cy), Point::new(width, cy), AXIS, 1.0);
	surface.line(Point::new(cx, 0.0), Point::new(cx, height), AXIS, 1.0);
	if config.tick_spacing <= 0.0 {
		return;
	}

	let mut x = 0.0;
	while x <= width {
		surface.line(
			Point::new(x, cy - TICK_HALF),
			Point::new(x, cy + TICK_HALF),
			AXIS,
			1.0,
		);
		surface.text(
			&format!("{}", x - cx),
			Point::new(x, cy + LABEL_OFFSET),
			12.0,
			TEXT,
			TextAnchor::TopCenter,
		);
		x += config.tick_spacing;
	}

	let mut y = 0.0;
	while y <= height {
		surface.line(
			Point::new(cx - TICK_HALF, y),
			Point::new(cx + TICK_HALF, y),
			AXIS,
			1.0,
		);
		surface.text(
			&format!("{}", cy - y),
			Point::new(cx - LABEL_OFFSET, y),
			12.0,
			TEXT,
			TextAnchor::CenterRight,
		);
		y += config.tick_spacing;
	}
}

fn draw_edge(
	snapshot: &GraphSnapshot<'_>,
	edge: &Edge,
	color: &str,
	width: f64,
	text_color: &str,
	surface: &impl DrawSurface,
) {
	let Some((a, b)) = snapshot.store.endpoints(edge) else {
		return;
	};
	surface.line(a.position, b.position, color, width);
	surface.text(
		&snapshot.display(edge.weight).to_string(),
		a.position.midpoint(&b.position),
		12.0,
		text_color,
		TextAnchor::Center,
	);
}

fn draw_vertices(snapshot: &GraphSnapshot<'_>, config: &CanvasConfig, surface: &impl DrawSurface) {
	for vertex in snapshot.store.vertices() {
		let at = vertex.position;
		surface.dot(at, config.vertex_radius, VERTEX);
		surface.text(
			&vertex.label,
			Point::new(at.x + LABEL_OFFSET, at.y - LABEL_OFFSET),
			14.0,
			LABEL,
			TextAnchor::Center,
		);
	}
}
