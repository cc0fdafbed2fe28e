pub mod draw_graph;
pub mod manual_input;
pub mod menu;
pub mod not_found;
