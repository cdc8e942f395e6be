//! Error types for devdetect.
//!
//! Classifiers never surface errors: a failing or missing capability is absorbed
//! where it is queried and turned into a negative or absent answer.
//! The types in this module show up at the edges instead, in environment
//! adapters (capability failures as [`BoxError`]) and in the cli.

use std::fmt::{self, Debug, Display};

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A type-erased error, for when it only matters that something failed and why.
pub struct OpaqueError(BoxError);

impl OpaqueError {
    /// Create an [`OpaqueError`] from an std error.
    pub fn from_std(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(error))
    }

    /// Create an [`OpaqueError`] from a message.
    pub fn from_display(msg: impl Display + Debug + Send + Sync + 'static) -> Self {
        Self::from_std(MessageError(msg))
    }

    /// True if the wrapped error is of type `T`.
    #[must_use]
    pub fn is<T: std::error::Error + 'static>(&self) -> bool {
        self.0.is::<T>()
    }

    #[must_use]
    pub fn into_boxed(self) -> BoxError {
        self.0
    }
}

impl Debug for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl std::error::Error for OpaqueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

struct MessageError<M>(M);

impl<M: Debug> Debug for MessageError<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl<M: Display> Display for MessageError<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<M: Display + Debug> std::error::Error for MessageError<M> {}

/// An error with a human readable context, displayed as `{context}: {error}`.
struct ContextError<C, E> {
    context: C,
    error: E,
}

impl<C: Display, E: Debug> Debug for ContextError<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextError")
            .field("context", &format_args!("{}", self.context))
            .field("error", &self.error)
            .finish()
    }
}

impl<C: Display, E: Display> Display for ContextError<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.error)
    }
}

impl<C: Display, E: std::error::Error + 'static> std::error::Error for ContextError<C, E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Add context to the error of a `Result`, or to the absence of a value in an `Option`.
///
/// # Examples
///
/// ```
/// use devdetect_core::error::ErrorContext;
///
/// let result = "five".parse::<u32>().context("parse max touch points");
/// assert_eq!(
///     result.unwrap_err().to_string(),
///     "parse max touch points: invalid digit found in string",
/// );
/// ```
pub trait ErrorContext: private::Sealed {
    type Output;

    /// Add a context to the contained error.
    fn context<M>(self, context: M) -> Result<Self::Output, OpaqueError>
    where
        M: Display + Send + Sync + 'static;

    /// Lazily add a context to the contained error, if any.
    fn with_context<C, F>(self, context: F) -> Result<Self::Output, OpaqueError>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ErrorContext for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    type Output = T;

    fn context<M>(self, context: M) -> Result<T, OpaqueError>
    where
        M: Display + Send + Sync + 'static,
    {
        self.map_err(|error| OpaqueError::from_std(ContextError { context, error }))
    }

    fn with_context<C, F>(self, context: F) -> Result<T, OpaqueError>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| {
            OpaqueError::from_std(ContextError {
                context: context(),
                error,
            })
        })
    }
}

impl<T> ErrorContext for Option<T> {
    type Output = T;

    fn context<M>(self, context: M) -> Result<T, OpaqueError>
    where
        M: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| {
            OpaqueError::from_std(ContextError {
                context,
                error: MessageError("value is missing"),
            })
        })
    }

    fn with_context<C, F>(self, context: F) -> Result<T, OpaqueError>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.context(context())
    }
}

mod private {
    pub trait Sealed {}

    impl<T, E> Sealed for Result<T, E> where E: std::error::Error + Send + Sync + 'static {}
    impl<T> Sealed for Option<T> {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct ProbeError;

    impl Display for ProbeError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("probe failed")
        }
    }

    impl std::error::Error for ProbeError {}

    #[test]
    fn test_result_context() {
        let err = Err::<(), _>(ProbeError).context("private mode").unwrap_err();
        assert_eq!(err.to_string(), "private mode: probe failed");
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.is::<ProbeError>());
    }

    #[test]
    fn test_option_context() {
        let err = None::<u32>
            .with_context(|| format!("touch points of {}", "snapshot"))
            .unwrap_err();
        assert_eq!(err.to_string(), "touch points of snapshot: value is missing");
        assert_eq!(Some(5).context("touch points").unwrap(), 5);
    }

    #[test]
    fn test_opaque_error_is_and_into_boxed() {
        let err = OpaqueError::from_std(ProbeError);
        assert!(err.is::<ProbeError>());
        assert!(!err.is::<std::fmt::Error>());
        assert!(err.into_boxed().is::<ProbeError>());

        let err = OpaqueError::from_display("invalid pointer query: hover");
        assert_eq!(err.to_string(), "invalid pointer query: hover");
    }
}
