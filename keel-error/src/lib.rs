//! # keel-error
//!
//! A uniform, cheaply-copyable error value that can carry any concrete error
//! type behind one capability surface.
//!
//! ## Design
//!
//! - **ErrorConcept**: what a concrete type provides (type label, details,
//!   debug info, display text). Implement it, or adapt an existing type with
//!   [`error_concept!`].
//! - **BasicError**: the default concrete error, built fluently.
//! - **TypeTag**: per-type identity, the only way to tell error kinds apart
//!   without knowing every type up front.
//! - **ErrorHandle**: shared, immutable, type-erased error. The currency
//!   passed around by consuming code.
//!
//! ## Usage
//!
//! ```rust
//! use keel_error::{make_error, BasicError, Result};
//!
//! fn reserve(bytes: u64) -> Result<u64> {
//!     if bytes > 1024 {
//!         return make_error(
//!             BasicError::new("storage", "disk full").with_info("errno=28"),
//!         );
//!     }
//!     Ok(bytes)
//! }
//!
//! let err = reserve(4096).unwrap_err();
//! assert_eq!(err.to_display_string(), "disk full");
//! assert!(err.is::<BasicError>());
//! ```
//!
//! ## Principles
//!
//! - Errors are data: fallible operations return [`OptionalError`] (absence
//!   is success) or [`Result`]
//! - Failure arms are built through [`make_error`], [`make_optional_error`]
//!   and [`make_result_error`], which never wrap a handle inside a handle
//! - Tags are compared for equality only; never ordered or persisted

mod basic;
mod capability;
mod handle;
mod result;
mod tag;

pub use basic::BasicError;
pub use capability::{ErrorCapability, ErrorConcept, TypeTagged};

#[doc(hidden)]
pub use capability::__private;
pub use handle::{ErrorHandle, IntoErrorHandle};
pub use result::{
    make_error, make_optional_error, make_result_error, success, OptionalError, Result,
    SuccessResult, NO_ERROR, SUCCESS,
};
pub use tag::TypeTag;
