//! Reference types: classes, instances, modules, callables, and lazy sequences.
//!
//! All of these are shared handles. Cloning a handle never copies the
//! instance, and every clone reports the same [`Identity`]. Attributes live
//! behind a `RefCell` so that cyclic graphs can be wired up after the
//! participating instances exist.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::identity::Identity;
use crate::value::Value;

/// Ordered attribute storage shared by classes, objects, and modules.
type Attributes = RefCell<Vec<(Arc<str>, Value)>>;

fn lookup(attributes: &Attributes, name: &str) -> Option<Value> {
    attributes
        .borrow()
        .iter()
        .find(|(key, _)| &**key == name)
        .map(|(_, value)| value.clone())
}

fn assign(attributes: &Attributes, name: Arc<str>, value: Value) {
    let mut attributes = attributes.borrow_mut();
    match attributes.iter_mut().find(|(key, _)| *key == name) {
        Some(slot) => slot.1 = value,
        None => attributes.push((name, value)),
    }
}

/// Produces the printed form of an instance.
///
/// Returning an error means the instance has no stable printed form; the
/// dumper then falls back to rendering it attribute by attribute.
pub type LiteralFormFn = fn(&Object) -> crate::Result<String>;

// =============================================================================
// Class
// =============================================================================

struct ClassData {
    name: Arc<str>,
    attributes: Attributes,
    hashable: bool,
    literal_form: Option<LiteralFormFn>,
}

/// A type object.
///
/// Class attributes (including methods) are visible through every instance
/// but never count as the instance's own attributes.
#[derive(Clone)]
pub struct Class(Rc<ClassData>);

impl Class {
    /// Creates a plain, hashable class with no attributes.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        ClassBuilder::new(name).build()
    }

    /// Starts building a class.
    #[must_use]
    pub fn builder(name: impl Into<Arc<str>>) -> ClassBuilder {
        ClassBuilder::new(name)
    }

    /// Returns the class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the identity of this class.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }

    /// Returns true if instances can be tracked by identity.
    #[must_use]
    pub fn instances_hashable(&self) -> bool {
        self.0.hashable
    }

    /// Returns the printed-form hook for instances, if the class opted in.
    #[must_use]
    pub fn literal_form(&self) -> Option<LiteralFormFn> {
        self.0.literal_form
    }

    /// Looks up a class attribute.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        lookup(&self.0.attributes, name)
    }

    /// Sets or replaces a class attribute.
    pub fn set(&self, name: impl Into<Arc<str>>, value: impl Into<Value>) {
        assign(&self.0.attributes, name.into(), value.into());
    }

    /// Returns true if the class defines an attribute with this name.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.0
            .attributes
            .borrow()
            .iter()
            .any(|(key, _)| &**key == name)
    }

    /// Returns a snapshot of the class attributes in definition order.
    #[must_use]
    pub fn attributes(&self) -> Vec<(Arc<str>, Value)> {
        self.0.attributes.borrow().clone()
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({})", self.0.name)
    }
}

/// Builder for [`Class`].
pub struct ClassBuilder {
    name: Arc<str>,
    attributes: Vec<(Arc<str>, Value)>,
    hashable: bool,
    literal_form: Option<LiteralFormFn>,
}

impl ClassBuilder {
    /// Creates a builder for a hashable class with no attributes.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            hashable: true,
            literal_form: None,
        }
    }

    /// Adds a class attribute.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Adds a method, stored as a callable class attribute.
    #[must_use]
    pub fn method(mut self, name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        let callable = Callable::method(Arc::clone(&self.name), Arc::clone(&name));
        self.attributes.push((name, Value::Callable(callable)));
        self
    }

    /// Marks instances as unusable in identity-keyed sets.
    #[must_use]
    pub fn unhashable(mut self) -> Self {
        self.hashable = false;
        self
    }

    /// Gives instances a stable printed form.
    #[must_use]
    pub fn with_literal_form(mut self, form: LiteralFormFn) -> Self {
        self.literal_form = Some(form);
        self
    }

    /// Finishes the class.
    #[must_use]
    pub fn build(self) -> Class {
        Class(Rc::new(ClassData {
            name: self.name,
            attributes: RefCell::new(self.attributes),
            hashable: self.hashable,
            literal_form: self.literal_form,
        }))
    }
}

// =============================================================================
// Object
// =============================================================================

struct ObjectData {
    class: Class,
    attributes: Attributes,
}

/// An instance of a [`Class`].
#[derive(Clone)]
pub struct Object(Rc<ObjectData>);

impl Object {
    /// Creates an instance with no instance attributes.
    #[must_use]
    pub fn new(class: &Class) -> Self {
        Self(Rc::new(ObjectData {
            class: class.clone(),
            attributes: RefCell::new(Vec::new()),
        }))
    }

    /// Returns the class of this instance.
    #[must_use]
    pub fn class(&self) -> &Class {
        &self.0.class
    }

    /// Returns the identity of this instance.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }

    /// Sets or replaces an instance attribute.
    pub fn set(&self, name: impl Into<Arc<str>>, value: impl Into<Value>) {
        assign(&self.0.attributes, name.into(), value.into());
    }

    /// Looks up an attribute, falling back to the class.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        lookup(&self.0.attributes, name).or_else(|| self.0.class.get(name))
    }

    /// Returns a snapshot of the instance attributes in assignment order.
    #[must_use]
    pub fn instance_attributes(&self) -> Vec<(Arc<str>, Value)> {
        self.0.attributes.borrow().clone()
    }

    /// Returns the `__name__` attribute if it holds a string.
    #[must_use]
    pub fn name(&self) -> Option<Arc<str>> {
        match self.get("__name__") {
            Some(Value::Str(name)) => Some(name),
            _ => None,
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Object {}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({} @ {:?})", self.0.class.name(), self.identity())
    }
}

// =============================================================================
// Module
// =============================================================================

struct ModuleData {
    name: Arc<str>,
    attributes: Attributes,
}

/// A module-like namespace.
#[derive(Clone)]
pub struct Module(Rc<ModuleData>);

impl Module {
    /// Creates an empty module.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(Rc::new(ModuleData {
            name: name.into(),
            attributes: RefCell::new(Vec::new()),
        }))
    }

    /// Returns the module name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the identity of this module.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }

    /// Sets or replaces a module attribute.
    pub fn set(&self, name: impl Into<Arc<str>>, value: impl Into<Value>) {
        assign(&self.0.attributes, name.into(), value.into());
    }

    /// Looks up a module attribute.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        lookup(&self.0.attributes, name)
    }

    /// Returns a snapshot of the module attributes in assignment order.
    #[must_use]
    pub fn attributes(&self) -> Vec<(Arc<str>, Value)> {
        self.0.attributes.borrow().clone()
    }
}

impl PartialEq for Module {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Module {}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Module({})", self.0.name)
    }
}

// =============================================================================
// Callable
// =============================================================================

enum CallableKind {
    Function { name: Arc<str> },
    Method { owner: Arc<str>, name: Arc<str> },
    Lambda,
}

/// A function, method, or closure.
#[derive(Clone)]
pub struct Callable(Rc<CallableKind>);

impl Callable {
    /// Creates a free function.
    #[must_use]
    pub fn function(name: impl Into<Arc<str>>) -> Self {
        Self(Rc::new(CallableKind::Function { name: name.into() }))
    }

    /// Creates a method of `owner`.
    #[must_use]
    pub fn method(owner: impl Into<Arc<str>>, name: impl Into<Arc<str>>) -> Self {
        Self(Rc::new(CallableKind::Method {
            owner: owner.into(),
            name: name.into(),
        }))
    }

    /// Creates an anonymous function.
    #[must_use]
    pub fn lambda() -> Self {
        Self(Rc::new(CallableKind::Lambda))
    }

    /// Returns the callable's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match &*self.0 {
            CallableKind::Function { name } | CallableKind::Method { name, .. } => name,
            CallableKind::Lambda => "<lambda>",
        }
    }

    /// Returns the identity of this callable.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Callable {}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0 {
            CallableKind::Function { name } => write!(f, "<function {name}>"),
            CallableKind::Method { owner, name } => write!(f, "<function {owner}.{name}>"),
            CallableKind::Lambda => write!(f, "<function <lambda>>"),
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// =============================================================================
// LazySeq
// =============================================================================

/// A single-pass, lazily produced sequence.
///
/// Consuming elements is permanent: every handle observes the same cursor,
/// and a drained sequence stays empty.
#[derive(Clone)]
pub struct LazySeq(Rc<RefCell<Box<dyn Iterator<Item = Value>>>>);

impl LazySeq {
    /// Wraps an iterator.
    pub fn new<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: 'static,
    {
        Self(Rc::new(RefCell::new(Box::new(iter.into_iter()))))
    }

    /// Pulls the next element.
    pub fn next_value(&self) -> Option<Value> {
        self.0.borrow_mut().next()
    }

    /// Returns the identity of this sequence.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}

impl PartialEq for LazySeq {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for LazySeq {}

impl fmt::Debug for LazySeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LazySeq({:?})", self.identity())
    }
}
