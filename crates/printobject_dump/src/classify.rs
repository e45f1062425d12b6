//! Deciding how a value is rendered.
//!
//! Classification never touches dumper state. The only fallible step is
//! probing an instance's printed form; a failed probe is logged and treated
//! as "no printed form".

use std::sync::Arc;

use printobject_foundation::{Identity, Value};

/// Render strategy for a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Element-wise iterable; rendered as a sequence.
    Sequence,
    /// Iterable with a non-empty key enumeration; rendered as a mapping.
    Mapping,
    /// Module-like namespace; rendered as a composite without recursion.
    Module,
    /// Value with a stable printed form.
    Literal(String),
    /// Anything else; rendered attribute by attribute.
    Composite,
}

/// The outcome of classifying one value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Identity to check against the visit set, if the value is tracked.
    pub tracked: Option<Identity>,
    /// How the value is rendered.
    pub shape: Shape,
}

/// Classifies a value.
///
/// A value is tracked for cycles when it has an identity, is hashable, and
/// has no stable printed form. Rendering priority is container, then
/// module, then literal, then composite.
#[must_use]
pub fn classify(value: &Value) -> Classification {
    let container = container_shape(value);
    let literal = match (&container, value) {
        (Some(_), _) | (None, Value::Module(_)) => None,
        (None, _) => probe_literal(value),
    };

    let tracked = value
        .identity()
        .filter(|_| value.is_hashable() && literal.is_none() && !matches!(value, Value::Module(_)));

    let shape = match (container, literal) {
        (Some(shape), _) => shape,
        (None, _) if matches!(value, Value::Module(_)) => Shape::Module,
        (None, Some(text)) => Shape::Literal(text),
        (None, None) => Shape::Composite,
    };

    Classification { tracked, shape }
}

fn container_shape(value: &Value) -> Option<Shape> {
    match value {
        Value::Map(entries) if !entries.is_empty() => Some(Shape::Mapping),
        // An empty map has no keys to enumerate
        Value::Map(_) | Value::List(_) | Value::Set(_) | Value::Lazy(_) => Some(Shape::Sequence),
        _ => None,
    }
}

fn probe_literal(value: &Value) -> Option<String> {
    match value.literal_form() {
        Ok(form) => form,
        Err(err) => {
            tracing::debug!(
                type_name = value.type_name(),
                error = %err,
                "literal form probe failed, rendering as composite"
            );
            None
        }
    }
}

/// Lists the attributes a composite renders.
///
/// An attribute is own if the value's type does not define it and it is
/// not callable.
#[must_use]
pub fn own_attributes(value: &Value) -> Vec<(Arc<str>, Value)> {
    value
        .members()
        .into_iter()
        .filter(|(name, member)| !value.type_has_member(name) && !member.is_callable())
        .collect()
}
