//! Result channel vocabulary and the factories that feed it

use crate::{ErrorHandle, IntoErrorHandle};

/// Success value or an [`ErrorHandle`]
pub type Result<T> = std::result::Result<T, ErrorHandle>;

/// `None` means success
pub type OptionalError = Option<ErrorHandle>;

/// Result of an operation whose only success payload is "it worked".
///
/// The `bool` is a placeholder. Callers must only check `is_ok()` and never
/// branch on the payload's value.
pub type SuccessResult = Result<bool>;

/// The "no error" sentinel for APIs returning [`OptionalError`]
pub const NO_ERROR: OptionalError = None;

/// The success arm of [`SuccessResult`]
pub const SUCCESS: SuccessResult = Ok(true);

/// Build the success arm of [`SuccessResult`]
pub fn success() -> SuccessResult {
    SUCCESS
}

/// Wrap an error value into a populated [`OptionalError`]
pub fn make_optional_error<E: IntoErrorHandle>(error: E) -> OptionalError {
    Some(error.into_error_handle())
}

/// Build the failure arm of a [`Result`].
///
/// Passing an existing [`ErrorHandle`] reuses it as-is; it is not wrapped a
/// second time, so its type tag still names the original concrete error.
pub fn make_error<T, E: IntoErrorHandle>(error: E) -> Result<T> {
    Err(error.into_error_handle())
}

/// Build the failure arm of a [`SuccessResult`]
pub fn make_result_error<E: IntoErrorHandle>(error: E) -> SuccessResult {
    make_error(error)
}
