use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use crate::graph::{CanvasConfig, Controller, DistanceUnit, Event, GraphError, Mode};

type Dispatch = Rc<dyn Fn(Event)>;

fn notify(err: &GraphError) {
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(&err.to_string());
	}
}

#[component]
pub fn MstCanvas(
	mode: Mode,
	#[prop(default = CanvasConfig::default())] config: CanvasConfig,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let controller = Rc::new(RefCell::new(Controller::new(mode, &config)));
	let ctx: Rc<RefCell<Option<CanvasRenderingContext2d>>> = Rc::new(RefCell::new(None));

	let (label_text, set_label_text) = signal(String::new());
	let (edge_text, set_edge_text) = signal(String::new());
	let (total, set_total) = signal(None::<String>);
	let (counts, set_counts) = signal((0usize, 0usize));

	let redraw: Rc<dyn Fn()> = {
		let (controller, ctx, config) = (controller.clone(), ctx.clone(), config.clone());
		Rc::new(move || {
			let c = controller.borrow();
			let snapshot = c.snapshot();
			if let Some(ref ctx) = *ctx.borrow() {
				render::render(&snapshot, &config, ctx);
			}

			// Only push text back when it differs, so typing keeps the caret.
			let context = c.context();
			if label_text.get_untracked() != context.pending_label {
				set_label_text.set(context.pending_label.clone());
			}
			if edge_text.get_untracked() != context.pending_edge {
				set_edge_text.set(context.pending_edge.clone());
			}
			set_counts.set((c.store().vertex_count(), c.store().edge_count()));
			set_total.set(
				(!c.mst().is_empty()).then(|| snapshot.display(c.mst().total_weight).to_string()),
			);
		})
	};

	let dispatch: Dispatch = {
		let (controller, redraw) = (controller.clone(), redraw.clone());
		Rc::new(move |event: Event| {
			let result = controller.borrow_mut().handle(event);
			redraw();
			if let Err(err) = result {
				if err.is_user_visible() {
					notify(&err);
				}
			}
		})
	};

	let (width, height) = (config.width, config.height);
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let Ok(Some(context)) = canvas.get_context("2d") else {
			return;
		};
		let Ok(context) = context.dyn_into::<CanvasRenderingContext2d>() else {
			return;
		};
		*ctx.borrow_mut() = Some(context);
		info!("MST canvas ready in {:?} mode", mode);
		redraw();
	});

	let d = dispatch.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(container) = container_ref.get() else {
			return;
		};
		let rect = container.get_bounding_client_rect();
		d(Event::PointerDown {
			x: ev.client_x() as f64 - rect.left(),
			y: ev.client_y() as f64 - rect.top(),
		});
	};

	let manual_controls = (mode == Mode::Manual).then(|| {
		view! {
			<label>"Vertex label"</label>
			<input
				type="text"
				placeholder="Enter vertex label (e.g., A)"
				prop:value=label_text
				on:input={
					let d = dispatch.clone();
					move |ev| d(Event::LabelInput(event_target_value(&ev)))
				}
			/>
			<p class="hint">"Click on the canvas to add a vertex with the entered label."</p>
			<label>"Edge"</label>
			<input
				type="text"
				placeholder="Enter edge (e.g., A B 5)"
				prop:value=edge_text
				on:input={
					let d = dispatch.clone();
					move |ev| d(Event::EdgeInput(event_target_value(&ev)))
				}
			/>
			<button on:click={
				let d = dispatch.clone();
				move |_| d(Event::AddEdgePressed)
			}>"Add Edge"</button>
		}
	});

	let units = DistanceUnit::ALL
		.into_iter()
		.map(|unit| {
			view! {
				<option value={unit.symbol()} selected={unit == DistanceUnit::default()}>
					{unit.symbol()}
				</option>
			}
		})
		.collect_view();

	view! {
		<div
			node_ref=container_ref
			class="mst-canvas"
			on:mousedown=on_mousedown
			style="display: flex; align-items: flex-start;"
		>
			<div
				class="mst-controls"
				style={format!(
					"width: {}px; flex: none; box-sizing: border-box; padding: 8px;",
					config.side_panel_width,
				)}
			>
				{manual_controls}
				<button on:click={
					let d = dispatch.clone();
					move |_| d(Event::RecomputePressed)
				}>"Calculate MST"</button>
				<button on:click={
					let d = dispatch.clone();
					move |_| d(Event::ClearPressed)
				}>"Clear Graph"</button>
				<label>"Scale"</label>
				<input
					type="number"
					min="1"
					value="1"
					on:input={
						let d = dispatch.clone();
						move |ev| d(Event::ScaleInput(event_target_value(&ev)))
					}
				/>
				<select on:change={
					let d = dispatch.clone();
					move |ev| {
						if let Some(unit) = DistanceUnit::from_symbol(&event_target_value(&ev)) {
							d(Event::UnitSelected(unit));
						}
					}
				}>{units}</select>
				<p>
					{move || {
						let (v, e) = counts.get();
						format!("Vertices: {}, Edges: {}", v, e)
					}}
				</p>
				<p>
					{move || {
						total
							.get()
							.map(|t| format!("Total MST Weight: {}", t))
							.unwrap_or_default()
					}}
				</p>
			</div>
			<canvas
				node_ref=canvas_ref
				class="mst-canvas-surface"
				style={format!("display: block; margin: {}px; cursor: crosshair;", config.padding)}
			/>
		</div>
	}
}
