//! Tanglewood - multiplayer interactive-fiction engine
//!
//! This crate re-exports all layers of the Tanglewood system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: tanglewood_runtime    — Config ingestion, TCP server, console, CLI
//! Layer 2: tanglewood_engine     — Builtin executors, action catalog, orchestrator
//!          tanglewood_parser     — Free-text command parser
//! Layer 1: tanglewood_world      — Entity model, world registry, descriptions
//! Layer 0: tanglewood_foundation — Error taxonomy, Name
//! ```

pub use tanglewood_engine as engine;
pub use tanglewood_foundation as foundation;
pub use tanglewood_parser as parser;
pub use tanglewood_runtime as runtime;
pub use tanglewood_world as world;
