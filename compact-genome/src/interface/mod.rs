//! The alphabet and codon types everything else in this crate is built from.

pub mod alphabet;
pub mod codon;
