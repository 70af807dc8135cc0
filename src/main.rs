//! Browser entry point for the document relationship graph.

use leptos::prelude::*;
use relation_graph_canvas::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App)
}
