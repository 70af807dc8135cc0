//! Errors of the graph view and its ingestion path.

use thiserror::Error;

/// Failures local to one change cycle. None of them should take the app down.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
	/// The canvas element or its 2D context could not be obtained.
	#[error("rendering surface unavailable: {0}")]
	MissingSurface(String),

	/// The analysis result did not parse into a document record.
	#[error("analysis result is not a valid document record: {0}")]
	InvalidRecord(String),

	/// A chat-completion envelope arrived without any message content.
	#[error("analysis response carried no content")]
	MissingContent,
}

/// Result alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
