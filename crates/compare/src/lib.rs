//! valuekit-compare - Structural comparison engines for runtime values
//!
//! Two engines over the [`valuekit_value`] model:
//!
//! - [`is_equal`] / [`is_equal_with`] — symmetric structural equality with
//!   cycle tolerance and an optional customizer hook.
//! - [`is_match`] / [`is_match_with`] — asymmetric subset matching: does the
//!   object contain everything the source describes?
//!
//! All per-call state (the cycle guard) is allocated at entry and dropped at
//! return; the engines are pure and re-entrant.

pub mod customizer;
pub mod equal;
pub mod matches;
pub mod visit;

// Re-exports for convenience
pub use customizer::{EntryKey, Verdict};
pub use equal::{is_equal, is_equal_with, EqualCustomizer};
pub use matches::{is_match, is_match_with, MatchCustomizer};
pub use visit::VisitSet;
