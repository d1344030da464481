//! Type erasure and the shared error handle

use crate::{ErrorCapability, ErrorConcept, TypeTag};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Holds one concrete error and exposes it as [`ErrorCapability`].
pub(crate) struct ErasedErrorAdapter<T> {
    inner: T,
}

impl<T: ErrorConcept> ErasedErrorAdapter<T> {
    pub(crate) fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: ErrorConcept> ErrorCapability for ErasedErrorAdapter<T> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::of::<T>()
    }

    fn to_display_string(&self) -> String {
        self.inner.to_display_string()
    }

    fn error_type(&self) -> &str {
        self.inner.error_type()
    }

    fn details(&self) -> &str {
        self.inner.details()
    }

    fn debug_info(&self) -> &str {
        self.inner.debug_info()
    }

    fn as_any(&self) -> &dyn Any {
        &self.inner
    }
}

/// Shared, immutable, type-erased error value.
///
/// Cloning is a reference-count bump; every clone sees the same instance.
/// Two handles describe "the same kind of error" when their
/// [`type_tag`](Self::type_tag)s are equal, see [`same_kind`](Self::same_kind).
///
/// `ErrorHandle` deliberately does not implement [`ErrorConcept`], so it can
/// never end up wrapped inside another handle.
#[derive(Clone)]
pub struct ErrorHandle {
    inner: Arc<dyn ErrorCapability>,
}

impl ErrorHandle {
    /// Erase a concrete error behind a new handle
    pub fn new<T: ErrorConcept>(error: T) -> Self {
        tracing::trace!(error.type_name = std::any::type_name::<T>(), "erasing error value");
        Self {
            inner: Arc::new(ErasedErrorAdapter::new(error)),
        }
    }

    // =========================================================================
    // Capability accessors
    // =========================================================================

    /// Identity of the concrete type that was erased
    pub fn type_tag(&self) -> TypeTag {
        self.inner.type_tag()
    }

    pub fn to_display_string(&self) -> String {
        self.inner.to_display_string()
    }

    pub fn error_type(&self) -> &str {
        self.inner.error_type()
    }

    pub fn details(&self) -> &str {
        self.inner.details()
    }

    pub fn debug_info(&self) -> &str {
        self.inner.debug_info()
    }

    /// Borrow the erased value through its object-safe interface
    pub fn as_capability(&self) -> &dyn ErrorCapability {
        self.inner.as_ref()
    }

    // =========================================================================
    // Discrimination
    // =========================================================================

    /// True when both handles carry the same concrete error type
    pub fn same_kind(&self, other: &ErrorHandle) -> bool {
        self.type_tag() == other.type_tag()
    }

    /// True when the erased value is a `T`
    pub fn is<T: ErrorConcept>(&self) -> bool {
        self.type_tag() == TypeTag::of::<T>()
    }

    /// The erased value, if it is a `T`
    pub fn downcast_ref<T: ErrorConcept>(&self) -> Option<&T> {
        if !self.is::<T>() {
            return None;
        }
        self.inner.as_any().downcast_ref::<T>()
    }

    /// True when both handles share one underlying instance
    pub fn ptr_eq(&self, other: &ErrorHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of handles sharing this instance
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl<T: ErrorConcept> From<T> for ErrorHandle {
    fn from(error: T) -> Self {
        ErrorHandle::new(error)
    }
}

impl fmt::Display for ErrorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl fmt::Debug for ErrorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.type_tag();
        if self.error_type().is_empty() {
            writeln!(f, "{}", tag)?;
        } else {
            writeln!(f, "{} [{}]", tag, self.error_type())?;
        }

        let display = self.to_display_string();
        if !display.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", display)?;
        }

        if !self.debug_info().is_empty() {
            writeln!(f)?;
            writeln!(f, "    Debug info: {}", self.debug_info())?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorHandle {}

// =============================================================================
// Conversion into a handle without double erasure
// =============================================================================

/// Anything that can become an [`ErrorHandle`].
///
/// Concrete error values are erased into a fresh handle. An existing handle
/// is passed through untouched, keeping the tag and accessors of the value it
/// already carries.
pub trait IntoErrorHandle {
    fn into_error_handle(self) -> ErrorHandle;
}

impl<T: ErrorConcept> IntoErrorHandle for T {
    fn into_error_handle(self) -> ErrorHandle {
        ErrorHandle::new(self)
    }
}

impl IntoErrorHandle for ErrorHandle {
    fn into_error_handle(self) -> ErrorHandle {
        tracing::trace!(error.type_name = self.type_tag().type_name(), "reusing error handle");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BasicError;
    use std::thread;

    struct Timeout {
        millis: u64,
        text: String,
    }

    impl Timeout {
        fn new(millis: u64) -> Self {
            Self {
                millis,
                text: format!("timed out after {}ms", millis),
            }
        }
    }

    impl ErrorConcept for Timeout {
        fn error_type(&self) -> &str {
            "timeout"
        }

        fn details(&self) -> &str {
            &self.text
        }

        fn debug_info(&self) -> &str {
            ""
        }

        fn to_display_string(&self) -> String {
            format!("[timeout] {}", self.text)
        }
    }

    #[test]
    fn test_accessors_delegate() {
        let handle = ErrorHandle::new(BasicError::new("fs", "disk full").with_info("errno=28"));
        assert_eq!(handle.error_type(), "fs");
        assert_eq!(handle.details(), "disk full");
        assert_eq!(handle.debug_info(), "errno=28");
        assert_eq!(handle.to_display_string(), "disk full");
        assert_eq!(handle.to_string(), "disk full");
    }

    #[test]
    fn test_custom_display_survives_erasure() {
        let handle = ErrorHandle::new(Timeout::new(250));
        assert_eq!(handle.details(), "timed out after 250ms");
        assert_eq!(handle.to_display_string(), "[timeout] timed out after 250ms");
    }

    #[test]
    fn test_tag_matches_concrete_type() {
        let a = ErrorHandle::new(BasicError::msg("a"));
        let b = ErrorHandle::new(BasicError::msg("b"));
        let c = ErrorHandle::new(Timeout::new(1));

        assert_eq!(a.type_tag(), TypeTag::of::<BasicError>());
        assert!(a.same_kind(&b));
        assert!(!a.same_kind(&c));
        assert!(a.is::<BasicError>());
        assert!(!a.is::<Timeout>());
    }

    struct Impostor;

    impl Impostor {
        // Not reachable through the handle; the tag comes from the type.
        #[allow(dead_code)]
        fn type_tag(&self) -> TypeTag {
            TypeTag::of::<BasicError>()
        }
    }

    impl ErrorConcept for Impostor {
        fn error_type(&self) -> &str {
            ""
        }

        fn details(&self) -> &str {
            "pretending"
        }

        fn debug_info(&self) -> &str {
            ""
        }
    }

    #[test]
    fn test_tag_cannot_be_spoofed() {
        let impostor = ErrorHandle::new(Impostor);
        let basic = ErrorHandle::new(BasicError::msg("real"));

        assert_eq!(impostor.type_tag(), TypeTag::of::<Impostor>());
        assert!(!impostor.same_kind(&basic));
        assert!(!impostor.is::<BasicError>());
        assert!(impostor.downcast_ref::<BasicError>().is_none());
        assert!(impostor.is::<Impostor>());
        assert!(impostor.downcast_ref::<Impostor>().is_some());
    }

    #[test]
    fn test_read_through_capability() {
        let handle = ErrorHandle::new(Timeout::new(75));
        let capability: &dyn ErrorCapability = handle.as_capability();

        assert_eq!(capability.type_tag(), TypeTag::of::<Timeout>());
        assert_eq!(capability.error_type(), "timeout");
        assert_eq!(capability.details(), "timed out after 75ms");
        assert_eq!(capability.debug_info(), "");
        assert_eq!(capability.to_display_string(), "[timeout] timed out after 75ms");
        assert!(capability.as_any().downcast_ref::<Timeout>().is_some());
    }

    #[test]
    fn test_downcast_ref() {
        let handle = ErrorHandle::new(Timeout::new(500));
        let timeout = handle.downcast_ref::<Timeout>().unwrap();
        assert_eq!(timeout.millis, 500);
        assert!(handle.downcast_ref::<BasicError>().is_none());
    }

    #[test]
    fn test_clone_shares_instance() {
        let original = ErrorHandle::new(BasicError::new("net", "reset").with_info("peer=10.0.0.2"));
        let copy = original.clone();
        assert!(copy.ptr_eq(&original));
        assert_eq!(original.strong_count(), 2);

        drop(original);
        assert_eq!(copy.strong_count(), 1);
        assert_eq!(copy.error_type(), "net");
        assert_eq!(copy.details(), "reset");
        assert_eq!(copy.debug_info(), "peer=10.0.0.2");
    }

    #[test]
    fn test_equal_content_is_not_same_instance() {
        let a = ErrorHandle::new(BasicError::msg("x"));
        let b = ErrorHandle::new(BasicError::msg("x"));
        assert!(a.same_kind(&b));
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn test_into_handle_reuses_existing() {
        let handle = ErrorHandle::new(Timeout::new(10));
        let reused = handle.clone().into_error_handle();
        assert!(reused.ptr_eq(&handle));
        assert!(reused.is::<Timeout>());
    }

    #[test]
    fn test_from_concrete() {
        fn fails() -> std::result::Result<(), ErrorHandle> {
            let read: std::result::Result<(), BasicError> = Err(BasicError::new("io", "eof"));
            read?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(err.is::<BasicError>());
        assert_eq!(err.details(), "eof");
    }

    #[test]
    fn test_debug_format() {
        let handle = ErrorHandle::new(BasicError::new("fs", "disk full").with_info("errno=28"));
        let debug = format!("{:?}", handle);
        assert!(debug.contains("BasicError [fs]"));
        assert!(debug.contains("Message: disk full"));
        assert!(debug.contains("Debug info: errno=28"));
    }

    #[test]
    fn test_interop_with_anyhow() {
        let handle = ErrorHandle::new(BasicError::msg("quota exceeded"));
        let any: anyhow::Error = handle.into();
        assert_eq!(any.to_string(), "quota exceeded");
        assert!(any.downcast_ref::<ErrorHandle>().is_some());
    }

    #[test]
    fn test_shared_across_threads() {
        let handle = ErrorHandle::new(BasicError::new("worker", "crashed"));
        let workers: Vec<_> = (0..4)
            .map(|_| {
                let handle = handle.clone();
                thread::spawn(move || handle.details().to_string())
            })
            .collect();

        for worker in workers {
            assert_eq!(worker.join().unwrap(), "crashed");
        }
        assert_eq!(handle.strong_count(), 1);
    }
}
