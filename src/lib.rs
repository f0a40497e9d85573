//! # fisherf
//!
//! Standalone Fisher F-distribution CDF and survival function.
//!
//! This crate evaluates P(F ≤ x) for an F-ratio with integer numerator and
//! denominator degrees of freedom using the finite recurrence of ACM
//! Algorithm 322, rather than delegating to a general incomplete-beta
//! routine from a statistics library.
//!
//! ## Modules
//!
//! - [`fisher`] — F-distribution CDF/SF evaluator (ACM Algorithm 322)
//!
//! ## Design Philosophy
//!
//! - **No unnecessary dependencies**: Pure Rust for core math
//! - **Explicit edge cases**: non-positive and infinite statistics map to
//!   exact 0/1 probabilities instead of propagating NaN
//! - **Property-based testing**: Mathematical invariants verified via proptest

pub mod fisher;
