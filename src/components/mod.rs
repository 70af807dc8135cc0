//! Page-level widgets and the relationship graph engine.

pub mod filter_panel;
pub mod relation_graph;
