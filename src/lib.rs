//! Responsive style resolution for breakpoint-gated utility classes.
//!
//! A [`StyleSheet`](style::StyleSheet) holds named viewport ranges and the
//! rules gated by them. Resolving a selector at a viewport width folds every
//! matching rule in declaration order, later declarations winning.

pub mod style;

pub use style::{BreakpointRegistry, ConfigurationError, ResolvedStyle, StyleSheet};
