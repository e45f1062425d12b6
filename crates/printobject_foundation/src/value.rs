//! Core value type for everything the dumper can inspect.

use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::collections::{Dict, List, Set};
use crate::identity::Identity;
use crate::object::{Callable, Class, LazySeq, Module, Object};

/// Any value handed to the dumper.
///
/// Scalars and collections are plain data; the remaining variants are
/// shared handles carrying an [`Identity`]. Cloning is O(1) for every
/// variant.
#[derive(Clone)]
pub enum Value {
    /// The nil value (represents absence).
    Nil,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Text, always treated as one atomic value.
    Str(Arc<str>),
    /// Persistent list.
    List(List<Value>),
    /// Persistent set.
    Set(Set<Value>),
    /// Persistent map.
    Map(Dict<Value, Value>),
    /// Function, method, or closure.
    Callable(Callable),
    /// Class instance.
    Object(Object),
    /// Type object.
    Class(Class),
    /// Module-like namespace.
    Module(Module),
    /// Single-pass lazy sequence.
    Lazy(LazySeq),
}

impl Value {
    /// Builds a list from any iterator of convertible items.
    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a set from any iterator of convertible items.
    pub fn set<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Set(items.into_iter().map(Into::into).collect())
    }

    /// Builds a map from any iterator of convertible pairs.
    pub fn map<K: Into<Value>, V: Into<Value>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the name of this value's type.
    ///
    /// Instances report their class name; every other variant has a fixed
    /// name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
            Self::Callable(_) => "function",
            Self::Object(obj) => obj.class().name(),
            Self::Class(_) => "type",
            Self::Module(_) => "module",
            Self::Lazy(_) => "generator",
        }
    }

    /// Returns the identity of reference values.
    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        match self {
            Self::Callable(f) => Some(f.identity()),
            Self::Object(obj) => Some(obj.identity()),
            Self::Class(class) => Some(class.identity()),
            Self::Module(module) => Some(module.identity()),
            Self::Lazy(seq) => Some(seq.identity()),
            _ => None,
        }
    }

    /// Returns true if this value may be used as a key in a hashed set.
    ///
    /// Mutable-looking containers and instances of unhashable classes are
    /// not.
    #[must_use]
    pub fn is_hashable(&self) -> bool {
        match self {
            Self::List(_) | Self::Set(_) | Self::Map(_) => false,
            Self::Object(obj) => obj.class().instances_hashable(),
            _ => true,
        }
    }

    /// Returns true if this value can be invoked.
    #[must_use]
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Callable(_))
    }

    /// Returns true if this value is nil.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the value's `__name__`, if it has a non-empty one.
    #[must_use]
    pub fn name(&self) -> Option<Arc<str>> {
        let name = match self {
            Self::Callable(f) => Some(f.name().into()),
            Self::Object(obj) => obj.name(),
            Self::Class(class) => Some(class.name().into()),
            Self::Module(module) => Some(module.name().into()),
            _ => None,
        };
        name.filter(|name| !name.is_empty())
    }

    /// Produces the self-describing printed form of this value.
    ///
    /// Returns `Ok(None)` for values that have no such form. Modules report
    /// a form here even though the dumper never uses it for them.
    ///
    /// # Errors
    ///
    /// Returns an error if an instance's printed-form hook fails.
    pub fn literal_form(&self) -> crate::Result<Option<String>> {
        match self {
            Self::Object(obj) => match obj.class().literal_form() {
                Some(form) => form(obj).map(Some),
                None => Ok(None),
            },
            Self::Class(_) | Self::Lazy(_) => Ok(None),
            _ => Ok(Some(self.to_string())),
        }
    }

    /// Lists every member visible on this value, own and inherited.
    ///
    /// Instance attributes shadow class attributes of the same name.
    #[must_use]
    pub fn members(&self) -> Vec<(Arc<str>, Value)> {
        match self {
            Self::Object(obj) => {
                let mut members = obj.instance_attributes();
                for (name, value) in obj.class().attributes() {
                    if !members.iter().any(|(key, _)| *key == name) {
                        members.push((name, value));
                    }
                }
                members
            }
            Self::Class(class) => class.attributes(),
            Self::Module(module) => module.attributes(),
            _ => Vec::new(),
        }
    }

    /// Returns true if `name` is a member of this value's type.
    #[must_use]
    pub fn type_has_member(&self, name: &str) -> bool {
        match self {
            Self::Object(obj) => obj.class().has_attribute(name),
            _ => false,
        }
    }

    /// Renders this value for use as a mapping key.
    ///
    /// Strings are used verbatim; everything else uses its printed form.
    /// Distinct keys can therefore share a text (`1` and `"1"`); the dumper
    /// quotes string keys that collide this way.
    #[must_use]
    pub fn key_text(&self) -> String {
        match self {
            Self::Str(s) => s.to_string(),
            other => other.to_string(),
        }
    }

    /// Attempts to extract an instance handle.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{{{:04X}}}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let s = n.to_string();
    f.write_str(&s)?;
    // Keep floats distinguishable from ints
    if n.is_finite() && !s.contains('.') && !s.contains('e') {
        f.write_str(".0")?;
    }
    Ok(())
}

fn write_joined<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a Value>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// The printed form of a value.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write_float(f, *n),
            Self::Str(s) => write_quoted(f, s),
            Self::List(items) => {
                f.write_char('[')?;
                write_joined(f, items.iter())?;
                f.write_char(']')
            }
            Self::Set(items) => {
                f.write_str("#{")?;
                write_joined(f, items.iter())?;
                f.write_char('}')
            }
            Self::Map(entries) => {
                f.write_char('{')?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_char('}')
            }
            Self::Callable(func) => write!(f, "{func}"),
            Self::Object(obj) => match obj.class().literal_form().map(|form| form(obj)) {
                Some(Ok(text)) => f.write_str(&text),
                _ => write!(f, "<{} object>", obj.class().name()),
            },
            Self::Class(class) => write!(f, "<class '{}'>", class.name()),
            Self::Module(module) => write!(f, "<module '{}'>", module.name()),
            Self::Lazy(_) => f.write_str("<generator object>"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(items) => write!(f, "{items:?}"),
            Self::Set(items) => write!(f, "#{items:?}"),
            Self::Map(entries) => write!(f, "{entries:?}"),
            Self::Object(obj) => write!(f, "{obj:?}"),
            Self::Class(class) => write!(f, "{class:?}"),
            Self::Module(module) => write!(f, "{module:?}"),
            Self::Lazy(seq) => write!(f, "{seq:?}"),
            other => fmt::Display::fmt(other, f),
        }
    }
}

// Reference variants compare by identity; floats by bits so Eq stays reflexive.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Set(a), Self::Set(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Callable(a), Self::Callable(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Class(a), Self::Class(b)) => a == b,
            (Self::Module(a), Self::Module(b)) => a == b,
            (Self::Lazy(a), Self::Lazy(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Nil => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Float(n) => n.to_bits().hash(state),
            Self::Str(s) => s.hash(state),
            Self::List(items) => items.hash(state),
            Self::Set(items) => items.hash(state),
            Self::Map(entries) => entries.hash(state),
            Self::Callable(_)
            | Self::Object(_)
            | Self::Class(_)
            | Self::Module(_)
            | Self::Lazy(_) => self.identity().hash(state),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Nil, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::list(v)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Self::Object(obj)
    }
}

impl From<&Object> for Value {
    fn from(obj: &Object) -> Self {
        Self::Object(obj.clone())
    }
}

impl From<Class> for Value {
    fn from(class: Class) -> Self {
        Self::Class(class)
    }
}

impl From<Module> for Value {
    fn from(module: Module) -> Self {
        Self::Module(module)
    }
}

impl From<Callable> for Value {
    fn from(f: Callable) -> Self {
        Self::Callable(f)
    }
}

impl From<LazySeq> for Value {
    fn from(seq: LazySeq) -> Self {
        Self::Lazy(seq)
    }
}
