#[doc(hidden)]
#[macro_export]
/// Defines a unit error type whose message is a static string.
macro_rules! __static_str_error {
    (
        $(#[$m:meta])*
        $vis:vis struct $name:ident = $desc:literal;
    ) => {
        $(#[$m])*
        #[derive(Debug, Default, Clone, PartialEq, Eq)]
        #[non_exhaustive]
        #[doc = $desc]
        $vis struct $name;

        impl $name {
            #[doc = concat!("Create a new ", stringify!($name), ".")]
            #[must_use]
            $vis fn new() -> Self {
                Self
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($desc)
            }
        }

        impl std::error::Error for $name {}
    }
}
#[doc(inline)]
pub use crate::__static_str_error as static_str_error;

#[cfg(test)]
mod tests {
    crate::macros::error::static_str_error! {
        /// test error
        struct TestError = "something went wrong";
    }

    #[test]
    fn test_static_str_error_display() {
        let err = TestError::new();
        assert_eq!(err.to_string(), "something went wrong");
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
        assert!(boxed.is::<TestError>());
    }
}
