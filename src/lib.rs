//! # sequor
//!
//! A lazy sequence operator library providing composable query operators
//! over ordered collections.
//!
//! ## Overview
//!
//! This library provides a small, self-contained set of sequence operators
//! that compose by method chaining. Lazy operators perform no work at
//! construction; a single pass over the final result pulls elements through
//! the chain one at a time. It includes:
//!
//! - **Filtering and Projection**: `filter`, `project` (lazy, order-preserving)
//! - **Ordering**: `order_by` / `then_by` multi-key stable sorting
//! - **Partitioning**: `take`, `skip`, `take_while`, `skip_while`, `chunks`
//! - **Lookup**: strict `first` / `single` and tolerant `..._or` /
//!   `..._or_default` variants, `contains` with custom equality
//! - **Deduplication**: `distinct`, `distinct_by`, `distinct_with`
//! - **Quantification**: `all`, `any` (short-circuiting)
//! - **Aggregation**: `aggregate`, `count`, `min_by_key`, `max_by_key`, `total`
//!
//! ## Feature Flags
//!
//! - `fxhash`: Use `rustc-hash` for the seen-sets maintained by the
//!   deduplication operators instead of the standard hasher
//!
//! ## Example
//!
//! ```rust
//! use sequor::prelude::*;
//!
//! let numbers = vec![3, 1, 4, 1, 5, 9, 2, 6];
//!
//! let result = Sequence::over(numbers)
//!     .filter(|&n| n > 1)
//!     .project(|n| n * 10)
//!     .take(3)
//!     .into_vec();
//!
//! assert_eq!(result, vec![30, 40, 50]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use sequor::prelude::*;
/// ```
pub mod prelude {
    pub use crate::equality::{DefaultEquality, Equality, KeyEquality, PairEquality};
    pub use crate::error::QueryError;
    pub use crate::mutate::update_each;
    pub use crate::ordering::{Comparator, Direction, OrderedSequence};
    pub use crate::sequence::Sequence;
}

pub mod equality;
pub mod error;
pub mod mutate;
pub mod ordering;
pub mod sequence;
