use leptos::prelude::*;

use crate::components::mst_canvas::MstCanvas;
use crate::graph::Mode;

/// Named vertices and typed weighted edges.
#[component]
pub fn ManualInput() -> impl IntoView {
	view! {
		<div class="page">
			<h1>"Minimum Spanning Tree Visualizer"</h1>
			<p class="subtitle">
				"Type a label and click to place a vertex. Add edges as 'A B weight'."
			</p>
			<MstCanvas mode=Mode::Manual />
		</div>
	}
}
