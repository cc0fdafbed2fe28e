use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page linking to both graph editors.
#[component]
pub fn Menu() -> impl IntoView {
	view! {
		<div class="menu">
			<h1>"Minimum Spanning Tree"</h1>
			<nav class="options">
				<A href="/draw">"Draw a graph"</A>
				<A href="/manual">"Enter vertices and edges"</A>
			</nav>
		</div>
	}
}
