//! Interactive minimum spanning tree builder.
//!
//! The [`graph`] module holds the browser-free core: the vertex/edge store,
//! both MST strategies and the input controller. The Leptos app wires it to
//! a canvas.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
pub mod graph;
mod pages;

// Top-Level pages
use crate::pages::draw_graph::DrawGraph;
use crate::pages::manual_input::ManualInput;
use crate::pages::menu::Menu;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router with the menu, both graph editors and a 404 page.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Minimum Spanning Tree" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Menu />
				<Route path=path!("/draw") view=DrawGraph />
				<Route path=path!("/manual") view=ManualInput />
			</Routes>
		</Router>
	}
}
