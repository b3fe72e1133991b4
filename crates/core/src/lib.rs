//! tcr-graph Core Library
//!
//! This library backs the tcr-graph walkthrough: building and printing a
//! small fixed directed graph, and running one query against the AIRR
//! knowledge base.

pub mod db;
pub mod graph;
pub mod render;

// Re-export commonly used types
pub use db::Receptor;
pub use graph::{Digraph, GraphSummary};
