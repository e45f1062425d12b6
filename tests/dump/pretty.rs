//! Pretty-printed output of whole dumps.

use printobject::dump::PrettyConfig;
use printobject::{DumpConfig, Value, pformat, pp_to};

use crate::ring;

#[test]
fn pformat_collapsed_ring() {
    let (a, ..) = ring();
    let text = pformat(&Value::from(&a), DumpConfig::collapsed());
    assert_eq!(
        text,
        "{__type__: <Node {id0}>,\n \
         name: \"A\",\n \
         refs: [{__type__: <Node {id1}>,\n         \
         name: \"B\",\n         \
         refs: [{__type__: <Node {id2}>, name: \"C\", refs: [dup <Node {id0}>]}]},\n        \
         {__type__: <Node {id3}>, name: \"D\", refs: [dup <Node {id2}>]}]}"
    );
}

#[test]
fn pp_to_honours_width() {
    let value = Value::list((0..30).map(Value::Int));
    let mut narrow = Vec::new();
    let mut wide = Vec::new();
    pp_to(&mut narrow, &value, DumpConfig::default(), &PrettyConfig::default().with_max_width(20))
        .unwrap();
    pp_to(&mut wide, &value, DumpConfig::default(), &PrettyConfig::default().with_max_width(200))
        .unwrap();

    let narrow = String::from_utf8(narrow).unwrap();
    let wide = String::from_utf8(wide).unwrap();
    assert_eq!(narrow.lines().count(), 30);
    assert_eq!(wide.lines().count(), 1);
    assert!(narrow.lines().all(|line| line.len() <= 20));
}
