//! Tracing core rexport, for your conveneince

#[doc(inline)]
pub use tracing::*;
