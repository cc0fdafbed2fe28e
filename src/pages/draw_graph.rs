use leptos::prelude::*;

use crate::components::mst_canvas::MstCanvas;
use crate::graph::Mode;

/// Click to place vertices; the tree follows straight-line distances.
#[component]
pub fn DrawGraph() -> impl IntoView {
	view! {
		<div class="page">
			<h1>"Minimum Spanning Tree Visualizer"</h1>
			<p class="subtitle">
				"Click the canvas to place vertices, then calculate the MST."
			</p>
			<MstCanvas mode=Mode::Draw />
		</div>
	}
}
