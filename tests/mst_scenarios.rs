//! End-to-end scenarios driven through the controller and the MST engine.

use mst_canvas::graph::{
	CanvasConfig, Controller, ControllerState, DisplayScale, DistanceUnit, Edge, Event,
	GraphError, GraphStore, Mode, MstResult, Point, UserScale, geometric_growth,
	union_find::DisjointSet, weighted_kruskal,
};

fn config() -> CanvasConfig {
	CanvasConfig {
		side_panel_width: 0.0,
		padding: 0.0,
		..CanvasConfig::default()
	}
}

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

fn manual(labels: &[&str], edges: &[(&str, &str, f64)]) -> GraphStore {
	let mut store = GraphStore::new();
	for (i, label) in labels.iter().enumerate() {
		store
			.add_vertex(Point::new(i as f64, 0.0), Some(label))
			.unwrap();
	}
	for &(a, b, w) in edges {
		store.add_edge(a, b, w).unwrap();
	}
	store
}

fn is_spanning_tree(vertex_count: usize, edges: &[Edge]) -> bool {
	if edges.len() + 1 != vertex_count {
		return false;
	}
	let mut sets = DisjointSet::new(vertex_count);
	edges.iter().all(|e| sets.union(e.a.0, e.b.0)) && sets.set_count() == 1
}

/// Cheapest spanning tree by trying every (V-1)-subset of edges.
fn brute_force_minimum(store: &GraphStore) -> Option<f64> {
	let (v, edges) = (store.vertex_count(), store.edges());
	let mut best: Option<f64> = None;
	for mask in 0u32..(1 << edges.len()) {
		if mask.count_ones() as usize + 1 != v {
			continue;
		}
		let chosen: Vec<Edge> = (0..edges.len())
			.filter(|i| mask & (1 << i) != 0)
			.map(|i| edges[i])
			.collect();
		if is_spanning_tree(v, &chosen) {
			let weight: f64 = chosen.iter().map(|e| e.weight).sum();
			best = Some(best.map_or(weight, |b: f64| b.min(weight)));
		}
	}
	best
}

#[test]
fn geometric_growth_spans_every_vertex() {
	for n in 2..=24 {
		let mut store = GraphStore::new();
		for i in 0..n {
			let p = Point::new(rand_simple(i) * 800.0, rand_simple(i + 1000) * 600.0);
			store.add_vertex(p, None).unwrap();
		}
		let result = geometric_growth(&store).unwrap();
		assert_eq!(result.edges.len(), n - 1);
		assert!(is_spanning_tree(n, &result.edges));

		let sum: f64 = result.edges.iter().map(|e| e.weight).sum();
		assert_eq!(result.total_weight, sum);
	}
}

#[test]
fn geometric_growth_matches_kruskal_on_complete_graph() {
	let points = [
		(10.0, 10.0),
		(200.0, 40.0),
		(90.0, 300.0),
		(400.0, 220.0),
		(310.0, 500.0),
		(60.0, 520.0),
	];
	let mut store = GraphStore::new();
	for &(x, y) in &points {
		store.add_vertex(Point::new(x, y), None).unwrap();
	}
	let labels: Vec<String> = store.vertices().iter().map(|v| v.label.clone()).collect();
	for i in 0..points.len() {
		for j in i + 1..points.len() {
			let (a, b) = (&store.vertices()[i], &store.vertices()[j]);
			let weight = a.position.distance_to(&b.position);
			store.add_edge(&labels[i], &labels[j], weight).unwrap();
		}
	}

	let geometric = geometric_growth(&store).unwrap();
	let kruskal = weighted_kruskal(&store).unwrap();
	assert!((geometric.total_weight - kruskal.total_weight).abs() < 1e-9);
}

#[test]
fn kruskal_is_minimal_against_brute_force() {
	let graphs = [
		manual(
			&["A", "B", "C", "D"],
			&[
				("A", "B", 1.0),
				("B", "C", 2.0),
				("C", "D", 3.0),
				("D", "A", 4.0),
				("A", "C", 5.0),
				("B", "D", 1.5),
			],
		),
		manual(
			&["A", "B", "C", "D", "E"],
			&[
				("A", "B", 7.0),
				("A", "C", 3.0),
				("B", "C", 3.0),
				("B", "D", 2.0),
				("C", "D", 8.0),
				("C", "E", 4.0),
				("D", "E", 4.0),
				("A", "E", 9.5),
			],
		),
		manual(
			&["P", "Q", "R"],
			&[("P", "Q", 0.0), ("Q", "R", 0.0), ("P", "R", 0.0)],
		),
	];

	for store in &graphs {
		let result = weighted_kruskal(store).unwrap();
		assert_eq!(result.edges.len(), store.vertex_count() - 1);
		assert!(is_spanning_tree(store.vertex_count(), &result.edges));
		assert_eq!(Some(result.total_weight), brute_force_minimum(store));
	}
}

#[test]
fn recompute_is_idempotent() {
	let mut controller = Controller::new(Mode::Draw, &config());
	for i in 0..8 {
		controller
			.handle(Event::PointerDown {
				x: rand_simple(i) * 800.0,
				y: rand_simple(i + 50) * 600.0,
			})
			.unwrap();
	}
	controller.handle(Event::RecomputePressed).unwrap();
	let first = controller.mst().clone();
	controller.handle(Event::RecomputePressed).unwrap();
	assert_eq!(controller.mst(), &first);
	assert_eq!(
		controller.mst().total_weight.to_bits(),
		first.total_weight.to_bits()
	);
}

#[test]
fn disconnected_graph_publishes_forest() {
	let mut controller = Controller::new(Mode::Manual, &config());
	for (label, x) in [("A", 10.0), ("B", 20.0), ("C", 30.0), ("D", 40.0)] {
		controller
			.handle(Event::LabelInput(label.to_owned()))
			.unwrap();
		controller.handle(Event::PointerDown { x, y: 10.0 }).unwrap();
	}
	for spec in ["A B 1", "C D 1"] {
		controller.handle(Event::EdgeInput(spec.to_owned())).unwrap();
		controller.handle(Event::AddEdgePressed).unwrap();
	}

	let err = controller.handle(Event::RecomputePressed).unwrap_err();
	let GraphError::GraphNotConnected { forest } = err else {
		panic!("expected GraphNotConnected, got {err:?}");
	};
	assert_eq!(forest.edges.len(), 2);
	assert_eq!(forest.total_weight, 2.0);
	assert_eq!(controller.mst(), &forest);
}

#[test]
fn duplicate_label_is_rejected() {
	let mut controller = Controller::new(Mode::Manual, &config());
	controller.handle(Event::LabelInput("A".to_owned())).unwrap();
	controller.handle(Event::PointerDown { x: 10.0, y: 10.0 }).unwrap();
	controller.handle(Event::LabelInput("A".to_owned())).unwrap();
	let err = controller
		.handle(Event::PointerDown { x: 90.0, y: 90.0 })
		.unwrap_err();
	assert!(matches!(err, GraphError::DuplicateLabel { .. }));
	assert!(err.is_user_visible());
	assert_eq!(controller.store().vertex_count(), 1);
}

#[test]
fn malformed_edge_text_changes_nothing() {
	let mut controller = Controller::new(Mode::Manual, &config());
	for (label, x) in [("A", 10.0), ("B", 20.0)] {
		controller
			.handle(Event::LabelInput(label.to_owned()))
			.unwrap();
		controller.handle(Event::PointerDown { x, y: 10.0 }).unwrap();
	}

	for (input, expect_malformed) in [("A B", true), ("A B five", false)] {
		controller.handle(Event::EdgeInput(input.to_owned())).unwrap();
		let err = controller.handle(Event::AddEdgePressed).unwrap_err();
		if expect_malformed {
			assert!(matches!(err, GraphError::MalformedEdgeSpec { .. }));
		} else {
			assert!(matches!(err, GraphError::InvalidWeight { .. }));
		}
		assert_eq!(controller.store().edge_count(), 0);
		assert_eq!(controller.context().pending_edge, input);
	}
}

#[test]
fn scaled_distance_displays_with_unit() {
	let scale = DisplayScale {
		user_scale: UserScale::new(2),
		unit: DistanceUnit::Meters,
	};
	assert_eq!(scale.format(150.0, 50.0).to_string(), "6.00 m");
}

#[test]
fn clear_resets_everything() {
	let mut controller = Controller::new(Mode::Manual, &config());
	for (label, x) in [("A", 10.0), ("B", 20.0)] {
		controller
			.handle(Event::LabelInput(label.to_owned()))
			.unwrap();
		controller.handle(Event::PointerDown { x, y: 10.0 }).unwrap();
	}
	controller.handle(Event::EdgeInput("A B 4".to_owned())).unwrap();
	controller.handle(Event::AddEdgePressed).unwrap();
	controller.handle(Event::RecomputePressed).unwrap();
	assert_eq!(controller.mst().total_weight, 4.0);

	controller.handle(Event::ClearPressed).unwrap();
	assert!(controller.store().vertices().is_empty());
	assert!(controller.store().edges().is_empty());
	assert_eq!(controller.mst(), &MstResult::default());
	assert_eq!(controller.mst().total_weight, 0.0);
	assert_eq!(controller.state(), ControllerState::Idle);
}
