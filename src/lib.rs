//! printobject - Cycle-safe recursive dumping of runtime object graphs
//!
//! This crate re-exports both layers of the system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: printobject_dump       — Classifier, traversal, pretty-printer, pp
//! Layer 0: printobject_foundation — Value model, Identity, Node, Error
//! ```

pub use printobject_dump as dump;
pub use printobject_foundation as foundation;

pub use printobject_dump::{DumpConfig, Dumper, pformat, pp, pp_to};
pub use printobject_foundation::{Node, Value};
