//! Opt-in structural self checks.
//!
//! Checks run in debug builds, or in release builds with the
//! `check-invariants` / `strict-invariants` features. A failed check means the
//! embedding is corrupted, so it panics instead of returning.

use crate::embedding_error::EmbeddingError;

/// Structures that can verify their own internal consistency.
pub trait DebugInvariants {
    /// Walk the structure and report the first inconsistency found.
    fn validate_invariants(&self) -> Result<(), EmbeddingError>;

    /// Panic on the first inconsistency when invariant checking is enabled.
    /// Compiles to nothing otherwise.
    #[inline]
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "debug_assert_invariants");
    }
}

/// Run a fallible check and panic with context when invariant checking is
/// enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
