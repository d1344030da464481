//! Runtime identity for concrete error types

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Opaque identity token of a concrete error type.
///
/// Two tags are equal if and only if they were produced for the same type.
/// Tags are stable for the lifetime of the process only; they are not a
/// content hash and must not be persisted, ordered, or sent anywhere.
#[derive(Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// The tag of `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Type name for diagnostics. Not part of equality, and not guaranteed
    /// to be unique or stable between compiler versions.
    pub fn type_name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag({})", self.name)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
