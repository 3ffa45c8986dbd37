//! This crate represents genes as sequences of codons over the DNA alphabet,
//! and searches them for codons while counting the comparisons spent.
#![warn(missing_docs)]

/// Decoding genes from and encoding them into nucleotide strings.
pub mod encoding;
/// Concrete gene representations.
pub mod implementation;
pub mod interface;
/// Codon search that reports its cost.
pub mod search;
