/// Genes as growable vectors of codons, and their borrowed slices.
pub mod gene;

/// The default gene type.
pub type DefaultGene = gene::Gene;
