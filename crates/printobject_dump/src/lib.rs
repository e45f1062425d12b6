//! Cycle-safe dumping of runtime values for debugging.
//!
//! This crate provides:
//! - [`Dumper`] - Renders a [`Value`] graph into a finite [`Node`] tree
//! - [`DumpConfig`] - Selects the duplicate-tracking policy
//! - [`pretty_print`] - Generic pretty-printer for [`Node`] trees
//! - [`pp`], [`pformat`], [`pp_to`] - Dump-and-print conveniences
//!
//! # Example
//!
//! ```
//! use printobject_dump::{DumpConfig, Dumper};
//! use printobject_foundation::{Class, Object, Value};
//!
//! let node = Class::new("Node");
//! let a = Object::new(&node);
//! a.set("next", &a);
//!
//! let out = Dumper::new(DumpConfig::default()).dump(&Value::from(&a));
//! assert_eq!(out.get("next").and_then(|n| n.as_text()), Some("dup <Node {id0}>"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classify;
pub mod config;
pub mod dumper;
pub mod label;
pub mod pp;
pub mod pretty;
pub mod visit;

pub use classify::{Classification, Shape, classify, own_attributes};
pub use config::DumpConfig;
pub use dumper::{Dumper, NAME_KEY, TYPE_KEY};
pub use label::LabelIndex;
pub use pp::{pformat, pp, pp_to};
pub use pretty::{PrettyConfig, pretty_print, pretty_print_with_config};
pub use printobject_foundation::{Node, Value};
pub use visit::{VisitPolicy, VisitSet};
