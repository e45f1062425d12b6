//! Instance identities.

use std::fmt;
use std::rc::Rc;

/// Stable token distinguishing one instance from another.
///
/// Derived from the address of a shared allocation, so two handles to the
/// same instance compare equal regardless of their contents. An identity is
/// only meaningful while the instance is alive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Identity(usize);

impl Identity {
    /// Returns the identity of the allocation behind `rc`.
    #[must_use]
    pub fn of<T: ?Sized>(rc: &Rc<T>) -> Self {
        Self(Rc::as_ptr(rc).cast::<()>() as usize)
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({:#x})", self.0)
    }
}
