#![warn(missing_docs)]
//! This crate offers traits to abstract over sequence implementations,
//! together with generic element search over them.
//!
//! Unordered sequences are searched with [linear_contains](search::linear_contains),
//! ordered sequences of [Comparable](comparable::Comparable) items with [binary_contains](search::binary_contains).

/// A total ordering contract used by ordered search.
pub mod comparable;
/// Implementations of the sequence traits for stdlib types.
pub mod implementation;
/// The traits abstracting over a sequence.
pub mod interface;
/// Generic linear and binary search.
pub mod search;
