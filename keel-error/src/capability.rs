//! The contract every error value satisfies

use crate::TypeTag;
use std::any::Any;

/// What a concrete type must provide to be carried as an error value.
///
/// Implement it directly, or adapt an existing type whose inherent methods
/// already have the right names with [`error_concept!`](crate::error_concept).
///
/// All accessors are reads. Mutation belongs to the concrete type and happens
/// before the value is handed to [`ErrorHandle`](crate::ErrorHandle).
pub trait ErrorConcept: Send + Sync + 'static {
    /// Short category label, possibly empty
    fn error_type(&self) -> &str;

    /// Primary human-readable message, possibly empty
    fn details(&self) -> &str;

    /// Developer-only diagnostics, never shown to end users
    fn debug_info(&self) -> &str;

    /// Canonical text used wherever the error is shown or logged.
    fn to_display_string(&self) -> String {
        self.details().to_string()
    }
}

/// The [`TypeTag`] of every [`ErrorConcept`].
///
/// Implemented for all error types at once, so no type can report another
/// type's tag.
pub trait TypeTagged: ErrorConcept {
    fn type_tag(&self) -> TypeTag;
}

impl<T: ErrorConcept> TypeTagged for T {
    fn type_tag(&self) -> TypeTag {
        TypeTag::of::<T>()
    }
}

/// Object-safe view of an erased error value.
///
/// This is what an [`ErrorHandle`](crate::ErrorHandle) points at. Consumers
/// normally go through the handle's accessors instead.
pub trait ErrorCapability: Send + Sync + 'static {
    fn type_tag(&self) -> TypeTag;

    fn to_display_string(&self) -> String;

    fn error_type(&self) -> &str;

    fn details(&self) -> &str;

    fn debug_info(&self) -> &str;

    /// The concrete value behind the erasure
    fn as_any(&self) -> &dyn Any;
}

/// Implement [`ErrorConcept`] for a type by forwarding to its own inherent
/// `error_type`, `details` and `debug_info` methods.
///
/// The inherent methods may return anything that derefs to `&str`. Pass
/// `display = method` to also forward `to_display_string`; the method may
/// return anything `Into<String>`.
///
/// ```rust
/// use keel_error::{error_concept, make_error, Result};
///
/// struct LegacyFault {
///     code: String,
///     text: String,
/// }
///
/// impl LegacyFault {
///     fn error_type(&self) -> &str { "legacy" }
///     fn details(&self) -> &String { &self.text }
///     fn debug_info(&self) -> &str { &self.code }
/// }
///
/// error_concept!(LegacyFault);
///
/// let res: Result<()> = make_error(LegacyFault { code: "E42".into(), text: "jammed".into() });
/// let err = res.unwrap_err();
/// assert_eq!(err.details(), "jammed");
/// assert_eq!(err.debug_info(), "E42");
/// ```
///
/// A type missing one of the accessors is rejected at compile time:
///
/// ```compile_fail
/// use keel_error::error_concept;
///
/// struct Partial {
///     text: String,
/// }
///
/// impl Partial {
///     fn error_type(&self) -> &str { "partial" }
///     fn details(&self) -> &str { &self.text }
/// }
///
/// error_concept!(Partial);
/// ```
#[macro_export]
macro_rules! error_concept {
    ($ty:ty) => {
        impl $crate::ErrorConcept for $ty {
            fn error_type(&self) -> &str {
                use $crate::__private::NoInherentAccessor as _;
                <$ty>::error_type(self)
            }

            fn details(&self) -> &str {
                use $crate::__private::NoInherentAccessor as _;
                <$ty>::details(self)
            }

            fn debug_info(&self) -> &str {
                use $crate::__private::NoInherentAccessor as _;
                <$ty>::debug_info(self)
            }
        }
    };
    ($ty:ty, display = $display:ident) => {
        impl $crate::ErrorConcept for $ty {
            fn error_type(&self) -> &str {
                use $crate::__private::NoInherentAccessor as _;
                <$ty>::error_type(self)
            }

            fn details(&self) -> &str {
                use $crate::__private::NoInherentAccessor as _;
                <$ty>::details(self)
            }

            fn debug_info(&self) -> &str {
                use $crate::__private::NoInherentAccessor as _;
                <$ty>::debug_info(self)
            }

            fn to_display_string(&self) -> String {
                use $crate::__private::NoInherentAccessor as _;
                <$ty>::$display(self).into()
            }
        }
    };
}

#[doc(hidden)]
pub mod __private {
    /// Returned when `error_concept!` finds no inherent accessor. It does not
    /// coerce to `&str`, which turns the missing method into a type error
    /// instead of a call back into `ErrorConcept`.
    pub struct MissingInherentAccessor;

    pub trait NoInherentAccessor {
        fn error_type(&self) -> MissingInherentAccessor {
            MissingInherentAccessor
        }

        fn details(&self) -> MissingInherentAccessor {
            MissingInherentAccessor
        }

        fn debug_info(&self) -> MissingInherentAccessor {
            MissingInherentAccessor
        }

        fn to_display_string(&self) -> MissingInherentAccessor {
            MissingInherentAccessor
        }
    }

    impl<T: ?Sized> NoInherentAccessor for T {}
}
