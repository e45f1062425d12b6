//! The output tree produced by a dump.

use std::fmt;

/// A rendered value.
///
/// Nodes always form a finite tree: cycles in the input are replaced by
/// [`Node::Duplicate`] markers before they reach the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Rendered elements of a sequence-like value, in enumeration order.
    Seq(Vec<Node>),
    /// Rendered entries of a mapping or composite, in enumeration order.
    Map(Vec<(String, Node)>),
    /// An already-printed primitive.
    Literal(String),
    /// Stand-in for a value that was already visited.
    Duplicate(String),
}

impl Node {
    /// Creates a literal node.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Returns the children of a sequence node.
    #[must_use]
    pub fn as_seq(&self) -> Option<&[Node]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries of a mapping node.
    #[must_use]
    pub fn as_map(&self) -> Option<&[(String, Node)]> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the text of a literal or duplicate node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Literal(text) | Self::Duplicate(text) => Some(text),
            _ => None,
        }
    }

    /// Returns true if this node marks an already-visited value.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }

    /// Looks up an entry of a mapping node by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_map()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    /// Returns the number of direct children (zero for leaves).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Seq(items) => items.len(),
            Self::Map(entries) => entries.len(),
            Self::Literal(_) | Self::Duplicate(_) => 0,
        }
    }

    /// Returns true if this node has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Counts duplicate markers anywhere in the tree.
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        match self {
            Self::Seq(items) => items.iter().map(Self::duplicate_count).sum(),
            Self::Map(entries) => entries.iter().map(|(_, n)| n.duplicate_count()).sum(),
            Self::Literal(_) => 0,
            Self::Duplicate(_) => 1,
        }
    }
}

/// Compact single-line form.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, node)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {node}")?;
                }
                write!(f, "}}")
            }
            Self::Literal(text) | Self::Duplicate(text) => write!(f, "{text}"),
        }
    }
}
