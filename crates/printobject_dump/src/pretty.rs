//! Pretty-printer for [`Node`] trees.
//!
//! A node that fits in the remaining width is printed on one line.
//! Otherwise its children go one per line, aligned under the first child.
//! Leaf text is printed verbatim, since it was already rendered by the
//! dumper.
//!
//! # Example
//!
//! ```
//! use printobject_dump::{PrettyConfig, pretty_print_with_config};
//! use printobject_foundation::Node;
//!
//! let node = Node::Seq(vec![Node::literal("1"), Node::literal("2")]);
//! assert_eq!(pretty_print_with_config(&node, &PrettyConfig::default()), "[1, 2]");
//! ```

use printobject_foundation::Node;

/// Configuration for pretty-printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettyConfig {
    /// Number of columns each nesting level is indented by.
    pub indent_width: usize,
    /// Maximum line width before breaking.
    pub max_width: usize,
    /// Whether mapping entries are printed in key order.
    pub sort_keys: bool,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent_width: 1,
            max_width: 80,
            sort_keys: true,
        }
    }
}

impl PrettyConfig {
    /// Builder method to set the indent width (at least 1).
    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width.max(1);
        self
    }

    /// Builder method to set the maximum line width.
    #[must_use]
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Builder method to keep mapping entries in enumeration order.
    #[must_use]
    pub fn with_sort_keys(mut self, sort: bool) -> Self {
        self.sort_keys = sort;
        self
    }
}

/// Pretty-print a node with the default configuration.
#[must_use]
pub fn pretty_print(node: &Node) -> String {
    pretty_print_with_config(node, &PrettyConfig::default())
}

/// Pretty-print a node with custom configuration.
#[must_use]
pub fn pretty_print_with_config(node: &Node, config: &PrettyConfig) -> String {
    let mut printer = PrettyPrinter::new(config);
    let layout = printer.measure(node);
    printer.print(&layout, 0);
    printer.output
}

/// A node with its one-line width and its children in print order.
struct Layout<'n> {
    node: &'n Node,
    width: usize,
    children: Vec<(Option<&'n str>, Layout<'n>)>,
}

/// Pretty-printer state.
struct PrettyPrinter<'a> {
    config: &'a PrettyConfig,
    output: String,
}

impl<'a> PrettyPrinter<'a> {
    fn new(config: &'a PrettyConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    fn measure<'n>(&self, node: &'n Node) -> Layout<'n> {
        let children: Vec<_> = match node {
            Node::Seq(items) => items.iter().map(|item| (None, self.measure(item))).collect(),
            Node::Map(entries) => self
                .ordered(entries)
                .into_iter()
                .map(|(key, child)| (Some(key.as_str()), self.measure(child)))
                .collect(),
            Node::Literal(text) | Node::Duplicate(text) => {
                return Layout {
                    node,
                    width: text.chars().count(),
                    children: Vec::new(),
                };
            }
        };
        let separators = 2 * children.len().saturating_sub(1);
        let width = children
            .iter()
            .map(|(key, child)| key.map_or(0, |k| k.chars().count() + 2) + child.width)
            .sum::<usize>()
            + separators
            + 2;
        Layout { node, width, children }
    }

    fn print(&mut self, layout: &Layout<'_>, column: usize) {
        if layout.children.is_empty() || column + layout.width <= self.config.max_width {
            self.write_flat(layout);
            return;
        }

        let inner = column + self.config.indent_width;
        let (open, close) = brackets(layout.node);
        self.open(open);
        for (i, (key, child)) in layout.children.iter().enumerate() {
            self.separate(i, inner);
            match key {
                Some(key) => {
                    self.output.push_str(key);
                    self.output.push_str(": ");
                    self.print(child, inner + key.chars().count() + 2);
                }
                None => self.print(child, inner),
            }
        }
        self.output.push(close);
    }

    fn open(&mut self, bracket: char) {
        self.output.push(bracket);
        for _ in 1..self.config.indent_width {
            self.output.push(' ');
        }
    }

    fn separate(&mut self, index: usize, column: usize) {
        if index > 0 {
            self.output.push_str(",\n");
            for _ in 0..column {
                self.output.push(' ');
            }
        }
    }

    fn ordered<'n>(&self, entries: &'n [(String, Node)]) -> Vec<&'n (String, Node)> {
        let mut ordered: Vec<_> = entries.iter().collect();
        if self.config.sort_keys {
            ordered.sort_by(|a, b| a.0.cmp(&b.0));
        }
        ordered
    }

    fn write_flat(&mut self, layout: &Layout<'_>) {
        let (open, close) = match layout.node {
            Node::Literal(text) | Node::Duplicate(text) => {
                self.output.push_str(text);
                return;
            }
            node => brackets(node),
        };
        self.output.push(open);
        for (i, (key, child)) in layout.children.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            if let Some(key) = key {
                self.output.push_str(key);
                self.output.push_str(": ");
            }
            self.write_flat(child);
        }
        self.output.push(close);
    }
}

fn brackets(node: &Node) -> (char, char) {
    match node {
        Node::Map(_) => ('{', '}'),
        _ => ('[', ']'),
    }
}
