//! Relationship graph of analyzed documents: filtering, link derivation,
//! drag layout, scene reconciliation and the edge tooltip.

mod component;
pub mod config;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod layout;
pub mod links;
mod render;
pub mod scene;
pub mod state;
pub mod tooltip;
pub mod types;

pub use component::RelationGraphCanvas;
pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use filter::{FilterSelection, filter_options, is_visible, visible_documents};
pub use ingest::{DocumentStore, parse_analysis};
pub use links::{derive_links, shared_attributes};
pub use tooltip::TooltipState;
pub use types::{DocId, Document, DocumentRecord, Link, NamedEntity, TagCategory, Topic};
