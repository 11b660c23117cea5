//! graphml2falkor: GraphML to FalkorDB migration pipeline
//!
//! This crate converts a GraphML file into a FalkorDB property graph in two
//! cooperating stages:
//!
//! 1. **Extraction** -- Stream-parse the GraphML document into one record
//!    per node and one per edge, resolving `<key>` declarations to typed
//!    attribute values and deriving a single label (nodes) or relationship
//!    type (edges) from the `label`/`type` attributes
//! 2. **Loading** -- Turn the records into injection-safe Cypher writes
//!    against FalkorDB: best-effort `id` indexes per label first, then all
//!    nodes, then all relationships matched by endpoint `id`
//!
//! # Design
//!
//! - **Streaming XML parsing** -- quick-xml event loop; the record set, not
//!   the document, is what lives in memory
//! - **Two-phase ordering** -- every node is written before any
//!   relationship is attempted; edges whose endpoints never loaded are
//!   counted as skipped rather than raised
//! - **Mapping-driven renames** -- an optional JSON config renames labels,
//!   relationship types, and property keys; absent entries mean identity
//! - **Single formatting boundary** -- every value entering query text goes
//!   through one recursive Cypher formatter; labels and keys are
//!   backtick-quoted
//! - **Fail-fast writes** -- a rejected write aborts the run with no
//!   retries and no rollback of data already written
//!
//! # Key Modules
//!
//! - [`parser`] -- GraphML extraction, topology summary, config templates
//! - [`mapping`] -- mapping configuration (JSON) and property renames
//! - [`loader`] -- FalkorDB session and the node/relationship load passes
//! - [`migrate`] -- orchestration of one migration run
//! - [`models`] -- records, property value union, Cypher formatting
//! - [`error`] -- error taxonomy of a run
//! - [`config`] -- compile-time defaults
//!
//! # Example Usage
//!
//! ```bash
//! # Inspect a file without touching the database
//! graphml2falkor graph.graphml --analyze-only
//!
//! # Generate a mapping template to customize, then migrate with it
//! graphml2falkor graph.graphml --generate-config mapping.json
//! graphml2falkor graph.graphml --config mapping.json --graph-name mygraph
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod mapping;
pub mod migrate;
pub mod models;
pub mod parser;

pub use error::{MigrateError, Result};
