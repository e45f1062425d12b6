//! Composite rendering: instances, classes, and modules.

use printobject::dump::dumper::{NAME_KEY, TYPE_KEY};
use printobject::foundation::{Callable, Class, Error, Module, Object, Result};
use printobject::{Dumper, Node, Value};

fn keys(node: &Node) -> Vec<&str> {
    node.as_map().unwrap().iter().map(|(k, _)| k.as_str()).collect()
}

fn text<'a>(node: &'a Node, key: &str) -> &'a str {
    node.get(key).and_then(Node::as_text).unwrap()
}

fn version_form(obj: &Object) -> Result<String> {
    match (obj.get("major"), obj.get("minor")) {
        (Some(Value::Int(major)), Some(Value::Int(minor))) => {
            Ok(format!("Version({major}, {minor})"))
        }
        _ => Err(Error::literal_probe("Version", "incomplete")),
    }
}

#[test]
fn instance_lists_own_attributes_only() {
    let class = Class::builder("Node")
        .attribute("classatt", "hidden")
        .method("__init__")
        .build();
    let node = Object::new(&class);
    node.set("name", "A");
    node.set("on_change", Callable::lambda());

    let out = Dumper::default().dump(&Value::from(node));
    assert_eq!(keys(&out), vec![TYPE_KEY, "name"]);
    assert_eq!(text(&out, TYPE_KEY), "<Node {id0}>");
    assert_eq!(text(&out, "name"), "\"A\"");
}

#[test]
fn shadowed_class_attribute_is_not_own() {
    let class = Class::builder("Node").attribute("kind", "leaf").build();
    let node = Object::new(&class);
    node.set("kind", "root");

    let out = Dumper::default().dump(&Value::from(node));
    assert_eq!(keys(&out), vec![TYPE_KEY]);
}

#[test]
fn class_dump() {
    let class = Class::builder("Node")
        .attribute("classatt", "hidden")
        .method("__init__")
        .build();
    let out = Dumper::default().dump(&Value::from(class));

    assert_eq!(keys(&out), vec![NAME_KEY, TYPE_KEY, "classatt"]);
    assert_eq!(text(&out, NAME_KEY), "Node");
    assert_eq!(text(&out, TYPE_KEY), "<type {id0}>");
}

#[test]
fn module_dump_lists_raw_values() {
    let class = Class::new("Node");
    let root = Object::new(&class);
    root.set("child", Object::new(&class));

    let module = Module::new("demos");
    module.set("root", &root);
    module.set("tests", Value::list([Value::from(Callable::function("test_module"))]));
    module.set("runtest", Callable::function("runtest"));

    let out = Dumper::default().dump(&Value::from(module));
    assert_eq!(keys(&out), vec![NAME_KEY, TYPE_KEY, "root", "tests"]);
    assert_eq!(text(&out, "root"), "<Node object>");
    assert_eq!(text(&out, "tests"), "[<function test_module>]");
}

#[test]
fn module_nested_in_container_is_still_not_recursed() {
    let module = Module::new("inner");
    module.set("x", Value::list([1, 2]));
    let out = Dumper::default().dump(&Value::list([Value::from(module)]));

    let inner = &out.as_seq().unwrap()[0];
    assert_eq!(inner.get("x"), Some(&Node::literal("[1, 2]")));
}

#[test]
fn literal_opt_in_renders_printed_form() {
    let class = Class::builder("Version").with_literal_form(version_form).build();
    let v = Object::new(&class);
    v.set("major", 1);
    v.set("minor", 4);

    let out = Dumper::default().dump(&Value::from(v));
    assert_eq!(out, Node::literal("Version(1, 4)"));
}

#[test]
fn failed_probe_renders_composite_without_error() {
    let class = Class::builder("Version").with_literal_form(version_form).build();
    let v = Object::new(&class);
    v.set("major", 1);

    let out = Dumper::default().dump(&Value::from(v));
    assert_eq!(text(&out, TYPE_KEY), "<Version {id0}>");
    assert_eq!(text(&out, "major"), "1");
}

#[test]
fn name_attribute_populates_name_field() {
    let class = Class::new("Service");
    let svc = Object::new(&class);
    svc.set("__name__", "billing");
    svc.set("port", 8080);

    let value = Value::from(svc);
    assert_eq!(Dumper::object_name(&value).as_deref(), Some("billing"));

    let out = Dumper::default().dump(&value);
    assert_eq!(keys(&out), vec![NAME_KEY, TYPE_KEY, "port"]);
}

#[test]
fn object_name_of_plain_values() {
    assert_eq!(Dumper::object_name(&Value::Int(1)), None);
    assert_eq!(
        Dumper::object_name(&Value::from(Callable::function("pp"))).as_deref(),
        Some("pp")
    );
}
