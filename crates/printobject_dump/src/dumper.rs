//! The cycle-safe traversal.
//!
//! A dump is one depth-first walk. Each value is classified, checked
//! against the visit set if it is tracked, and rendered bottom-up into a
//! [`Node`]. Infinitely deep acyclic inputs are not guarded against.

use std::collections::HashMap;
use std::sync::Arc;

use printobject_foundation::{Identity, Node, Value};

use crate::classify::{Shape, classify, own_attributes};
use crate::config::DumpConfig;
use crate::label::LabelIndex;
use crate::visit::{VisitPolicy, VisitSet};

/// Key holding a composite's name.
pub const NAME_KEY: &str = "__name__";

/// Key holding a composite's type tag.
pub const TYPE_KEY: &str = "__type__";

/// Renders values into [`Node`] trees.
///
/// The label index persists across calls, so repeated dumps with one
/// dumper tag the same instance identically. Visit sets never outlive a
/// single [`Dumper::dump`] call.
#[derive(Clone, Debug, Default)]
pub struct Dumper {
    config: DumpConfig,
    labels: LabelIndex,
}

impl Dumper {
    /// Creates a dumper with the given configuration.
    #[must_use]
    pub fn new(config: DumpConfig) -> Self {
        Self {
            config,
            labels: LabelIndex::new(),
        }
    }

    /// Returns the labels assigned so far.
    #[must_use]
    pub fn labels(&self) -> &LabelIndex {
        &self.labels
    }

    /// Renders `value` into a finite tree.
    pub fn dump(&mut self, value: &Value) -> Node {
        tracing::debug!(
            type_name = value.type_name(),
            collapse_duplicates = self.config.collapse_duplicates,
            "dump started"
        );
        let mut visited = VisitSet::new();
        let node = self.render(value, &mut visited);
        tracing::debug!(
            duplicates = node.duplicate_count(),
            labels = self.labels.len(),
            "dump finished"
        );
        node
    }

    /// Returns the `__name__` of a value, if it has one.
    #[must_use]
    pub fn object_name(value: &Value) -> Option<Arc<str>> {
        value.name()
    }

    /// Returns the `<TypeName {idN}>` tag for a value, labelling it if new.
    pub fn type_tag(&mut self, value: &Value) -> String {
        let type_name = value.type_name();
        match value.identity() {
            Some(id) => format!("<{type_name} {{id{}}}>", self.labels.label(id, value)),
            None => format!("<{type_name}>"),
        }
    }

    fn render(&mut self, value: &Value, visited: &mut VisitSet) -> Node {
        let classification = classify(value);
        let Some(id) = classification.tracked else {
            return self.render_shape(value, classification.shape, visited);
        };

        if visited.contains(id) {
            return self.render_duplicate(value, id);
        }

        match self.config.visit_policy() {
            VisitPolicy::Collapse => {
                visited.insert(id, value);
                self.render_shape(value, classification.shape, visited)
            }
            VisitPolicy::Path => {
                let mut branch = visited.with(id, value);
                self.render_shape(value, classification.shape, &mut branch)
            }
        }
    }

    fn render_shape(&mut self, value: &Value, shape: Shape, visited: &mut VisitSet) -> Node {
        match shape {
            Shape::Sequence => self.render_sequence(value, visited),
            Shape::Mapping => self.render_mapping(value, visited),
            Shape::Module => self.render_composite(value, visited, false),
            Shape::Literal(text) => Node::Literal(text),
            Shape::Composite => self.render_composite(value, visited, true),
        }
    }

    fn render_sequence(&mut self, value: &Value, visited: &mut VisitSet) -> Node {
        let items = match value {
            Value::List(items) => items.iter().map(|v| self.render(v, visited)).collect(),
            Value::Set(items) => items.iter().map(|v| self.render(v, visited)).collect(),
            Value::Map(entries) => entries.keys().map(|k| self.render(k, visited)).collect(),
            Value::Lazy(seq) => {
                let mut items = Vec::new();
                while let Some(item) = seq.next_value() {
                    items.push(self.render(&item, visited));
                }
                items
            }
            _ => Vec::new(),
        };
        Node::Seq(items)
    }

    fn render_mapping(&mut self, value: &Value, visited: &mut VisitSet) -> Node {
        let Value::Map(entries) = value else {
            return Node::Map(Vec::new());
        };
        let mut seen: HashMap<String, usize> = HashMap::new();
        for key in entries.keys() {
            *seen.entry(key.key_text()).or_default() += 1;
        }
        let entries = entries
            .iter()
            .map(|(k, v)| {
                let mut key = k.key_text();
                // A string key that reads like another key is written quoted
                if matches!(k, Value::Str(_)) && seen.get(&key).copied().unwrap_or(0) > 1 {
                    key = k.to_string();
                }
                (key, self.render(v, visited))
            })
            .collect();
        Node::Map(entries)
    }

    fn render_composite(&mut self, value: &Value, visited: &mut VisitSet, recurse: bool) -> Node {
        let mut entries: Vec<(String, Node)> = Vec::new();
        if let Some(name) = value.name() {
            entries.push((NAME_KEY.to_string(), Node::Literal(name.to_string())));
        }
        entries.push((TYPE_KEY.to_string(), Node::Literal(self.type_tag(value))));

        for (name, attr) in own_attributes(value) {
            let node = if recurse {
                self.render(&attr, visited)
            } else {
                Node::Literal(attr.to_string())
            };
            // An own attribute may reuse a reserved key; the later entry wins
            match entries.iter_mut().find(|(key, _)| key.as_str() == &*name) {
                Some(slot) => slot.1 = node,
                None => entries.push((name.to_string(), node)),
            }
        }
        Node::Map(entries)
    }

    fn render_duplicate(&mut self, value: &Value, id: Identity) -> Node {
        let label = self.labels.label(id, value);
        tracing::trace!(type_name = value.type_name(), label, "duplicate reference");
        Node::Duplicate(format!("dup <{} {{id{label}}}>", value.type_name()))
    }
}
