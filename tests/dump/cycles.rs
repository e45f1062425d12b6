//! Cycle detection under both visit policies.

use printobject::dump::dumper::TYPE_KEY;
use printobject::{DumpConfig, Dumper, Node, Value};

use crate::ring;

fn refs(node: &Node) -> &[Node] {
    node.get("refs").and_then(Node::as_seq).unwrap()
}

fn type_tag(node: &Node) -> &str {
    node.get(TYPE_KEY).and_then(Node::as_text).unwrap()
}

fn dup(tag: &str) -> Node {
    Node::Duplicate(format!("dup {tag}"))
}

#[test]
fn ring_without_collapse_breaks_only_at_ancestors() {
    let (a, ..) = ring();
    let out = Dumper::default().dump(&Value::from(&a));

    assert_eq!(type_tag(&out), "<Node {id0}>");
    let [b, d] = refs(&out) else { panic!("A has two refs") };
    assert_eq!(type_tag(b), "<Node {id1}>");

    // B -> C -> dup A
    let c_via_b = &refs(b)[0];
    assert_eq!(type_tag(c_via_b), "<Node {id2}>");
    assert_eq!(refs(c_via_b), &[dup("<Node {id0}>")]);

    // D -> C is a sibling revisit, so C is rendered in full again
    assert_eq!(type_tag(d), "<Node {id3}>");
    let c_via_d = &refs(d)[0];
    assert!(!c_via_d.is_duplicate());
    assert_eq!(c_via_d, c_via_b);

    assert_eq!(out.duplicate_count(), 2);
}

#[test]
fn ring_with_collapse_marks_every_repeat() {
    let (a, ..) = ring();
    let out = Dumper::new(DumpConfig::collapsed()).dump(&Value::from(&a));

    let [b, d] = refs(&out) else { panic!("A has two refs") };
    assert!(!b.is_duplicate());
    assert!(!d.is_duplicate());

    let c = &refs(b)[0];
    assert_eq!(type_tag(c), "<Node {id2}>");
    assert_eq!(refs(c), &[dup("<Node {id0}>")]);

    assert_eq!(type_tag(d), "<Node {id3}>");
    assert_eq!(refs(d), &[dup("<Node {id2}>")]);
    assert_eq!(out.duplicate_count(), 2);
}

#[test]
fn dumping_from_another_entry_point() {
    let (_, _, c, _) = ring();
    let out = Dumper::default().dump(&Value::from(&c));

    // C -> A -> {B -> dup C, D -> dup C}
    let a = &refs(&out)[0];
    let [b, d] = refs(a) else { panic!("A has two refs") };
    assert_eq!(refs(b), &[dup("<Node {id0}>")]);
    assert_eq!(refs(d), &[dup("<Node {id0}>")]);
}

#[test]
fn mutual_references_through_containers() {
    let (a, b, ..) = ring();
    let value = Value::map([("left", Value::from(&a)), ("right", Value::from(&b))]);
    let out = Dumper::new(DumpConfig::collapsed()).dump(&value);

    // Whichever key is enumerated second finds its node already rendered
    assert!(out.duplicate_count() >= 2);
    assert_eq!(out.len(), 2);
}

#[test]
fn unhashable_instances_are_never_marked() {
    use printobject::foundation::{Class, Object};

    let bag = Class::builder("Bag").unhashable().build();
    let shared = Object::new(&bag);
    shared.set("n", 1);
    let value = Value::list([Value::from(&shared), Value::from(&shared)]);

    let out = Dumper::new(DumpConfig::collapsed()).dump(&value);
    assert_eq!(out.duplicate_count(), 0);
    assert_eq!(type_tag(&out.as_seq().unwrap()[1]), "<Bag {id0}>");
}

#[test]
fn lazy_seq_containing_itself_is_marked() {
    use printobject::foundation::LazySeq;
    use std::cell::RefCell;
    use std::rc::Rc;

    let slot: Rc<RefCell<Option<LazySeq>>> = Rc::new(RefCell::new(None));
    let inner = Rc::clone(&slot);
    let seq = LazySeq::new(
        std::iter::once(()).filter_map(move |()| inner.borrow().clone().map(Value::from)),
    );
    *slot.borrow_mut() = Some(seq.clone());

    let out = Dumper::default().dump(&Value::from(seq));
    assert_eq!(out, Node::Seq(vec![dup("<generator {id0}>")]));
}
