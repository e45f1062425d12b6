//! Property tests: shape preservation and termination on arbitrary graphs.

use std::collections::HashSet;

use printobject::dump::dumper::TYPE_KEY;
use printobject::foundation::{Class, Object};
use printobject::{DumpConfig, Dumper, Node, Value};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

fn nested() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(|items| Value::list(items)),
            prop::collection::vec(("[a-z]{1,4}", inner), 1..6).prop_map(|entries| Value::map(entries)),
        ]
    })
}

/// Checks that `node` has the same shape as the acyclic `value`.
fn mirrors(value: &Value, node: &Node) -> bool {
    match (value, node) {
        (Value::List(items), Node::Seq(nodes)) => {
            items.len() == nodes.len() && items.iter().zip(nodes).all(|(v, n)| mirrors(v, n))
        }
        (Value::Map(entries), Node::Map(nodes)) => {
            entries.len() == nodes.len()
                && entries.iter().all(|(k, v)| {
                    node.get(&k.key_text()).is_some_and(|n| mirrors(v, n))
                })
        }
        (Value::Map(entries), Node::Seq(nodes)) => entries.is_empty() && nodes.is_empty(),
        (leaf, Node::Literal(text)) => *text == leaf.to_string(),
        _ => false,
    }
}

/// Builds `n` nodes wired by `edges` and returns them.
fn graph(n: usize, edges: &[(usize, usize)]) -> Vec<Object> {
    let class = Class::new("Vertex");
    let nodes: Vec<Object> = (0..n).map(|_| Object::new(&class)).collect();
    for (i, node) in nodes.iter().enumerate() {
        let out: Vec<&Object> = edges
            .iter()
            .filter(|(from, _)| *from == i)
            .map(|(_, to)| &nodes[*to])
            .collect();
        node.set("out", out);
    }
    nodes
}

fn reachable(edges: &[(usize, usize)]) -> usize {
    let mut seen = HashSet::from([0]);
    let mut stack = vec![0];
    while let Some(i) = stack.pop() {
        for &(from, to) in edges {
            if from == i && seen.insert(to) {
                stack.push(to);
            }
        }
    }
    seen.len()
}

/// Counts composites rendered in full.
fn composites(node: &Node) -> usize {
    match node {
        Node::Seq(items) => items.iter().map(composites).sum(),
        Node::Map(entries) => {
            usize::from(node.get(TYPE_KEY).is_some())
                + entries.iter().map(|(_, n)| composites(n)).sum::<usize>()
        }
        Node::Literal(_) | Node::Duplicate(_) => 0,
    }
}

fn edges_strategy(max: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=max).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..(2 * n))))
}

proptest! {
    #[test]
    fn acyclic_values_mirror_their_shape(value in nested()) {
        let out = Dumper::default().dump(&value);
        prop_assert!(mirrors(&value, &out), "{value:?} rendered as {out}");
    }

    #[test]
    fn fresh_dumpers_agree(value in nested()) {
        prop_assert_eq!(Dumper::default().dump(&value), Dumper::default().dump(&value));
    }

    #[test]
    fn collapse_renders_each_reachable_vertex_once((n, edges) in edges_strategy(8)) {
        let nodes = graph(n, &edges);
        let out = Dumper::new(DumpConfig::collapsed()).dump(&Value::from(&nodes[0]));
        prop_assert_eq!(composites(&out), reachable(&edges));
    }

    #[test]
    fn path_mode_terminates_on_cycles((n, edges) in edges_strategy(5)) {
        let nodes = graph(n, &edges);
        let out = Dumper::default().dump(&Value::from(&nodes[0]));
        prop_assert!(composites(&out) >= 1);
    }

    #[test]
    fn forward_edges_never_produce_markers((n, edges) in edges_strategy(6)) {
        let forward: Vec<_> = edges.into_iter().filter(|(from, to)| from < to).collect();
        let nodes = graph(n, &forward);
        let out = Dumper::default().dump(&Value::from(&nodes[0]));
        prop_assert_eq!(out.duplicate_count(), 0);
    }
}
