//! Dumpable value model, identities, and output nodes for printobject.
//!
//! This crate provides:
//! - [`Value`] - The closed set of values the dumper understands
//! - [`Identity`] - Per-instance tokens used for cycle detection and labels
//! - Composite handles ([`Object`], [`Class`], [`Module`], [`Callable`], [`LazySeq`])
//! - Persistent collections ([`List`], [`Set`], [`Dict`])
//! - [`Node`] - The finite output tree produced by a dump
//! - [`Error`] - Error types with categorized kinds

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod identity;
pub mod node;
pub mod object;
pub mod value;

pub use collections::{Dict, List, Set};
pub use error::{Error, ErrorKind};
pub use identity::Identity;
pub use node::Node;
pub use object::{Callable, Class, ClassBuilder, LazySeq, LiteralFormFn, Module, Object};
pub use value::Value;

/// Result type alias using the printobject error type.
pub type Result<T> = std::result::Result<T, Error>;
