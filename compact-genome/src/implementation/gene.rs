//! A gene stored as vector of codons.

use crate::encoding::encode_gene;
use crate::interface::codon::Codon;
use ref_cast::RefCast;
use std::borrow::Borrow;
use std::fmt::{Display, Formatter};
use std::iter::FromIterator;
use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};
use traitsequence::interface::Sequence;

/// A gene, i.e. a sequence of codons owning its codons.
///
/// The order of the codons is the order in which they appear in the source strand,
/// until the gene is [sorted](Gene::sort).
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Gene {
    codons: Vec<Codon>,
}

/// A borrowed, contiguous part of a gene.
#[derive(RefCast, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct GeneSlice {
    codons: [Codon],
}

impl Gene {
    /// Creates an empty gene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty gene with space for at least `capacity` codons.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            codons: Vec::with_capacity(capacity),
        }
    }

    /// Appends a codon to the end of this gene.
    pub fn push(&mut self, codon: Codon) {
        self.codons.push(codon);
    }

    /// Sorts the codons of this gene ascending.
    /// Afterwards, the gene can be searched with binary search.
    pub fn sort(&mut self) {
        self.codons.sort_unstable();
    }

    /// Returns this gene with its codons sorted ascending.
    pub fn sorted(mut self) -> Self {
        self.sort();
        self
    }

    /// Get a reference to this gene as its subsequence type.
    pub fn as_gene_slice(&self) -> &GeneSlice {
        GeneSlice::ref_cast(&self.codons[..])
    }

    /// Consumes this gene and returns its codons.
    pub fn into_codons(self) -> Vec<Codon> {
        self.codons
    }
}

impl GeneSlice {
    /// The codons of this slice.
    pub fn codons(&self) -> &[Codon] {
        &self.codons
    }

    /// The number of nucleotides encoded by this slice.
    pub fn nucleotide_len(&self) -> usize {
        self.codons.len() * Codon::LEN
    }
}

impl<'a> Sequence<'a, Codon, GeneSlice> for Gene {
    type Iterator = std::slice::Iter<'a, Codon>;

    fn iter(&'a self) -> Self::Iterator {
        self.codons.iter()
    }

    fn len(&self) -> usize {
        self.codons.len()
    }
}

impl<'a> Sequence<'a, Codon, GeneSlice> for GeneSlice {
    type Iterator = std::slice::Iter<'a, Codon>;

    fn iter(&'a self) -> Self::Iterator {
        self.codons.iter()
    }

    fn len(&self) -> usize {
        self.codons.len()
    }
}

impl Index<usize> for Gene {
    type Output = Codon;

    fn index(&self, index: usize) -> &Self::Output {
        self.codons.index(index)
    }
}

impl Index<Range<usize>> for Gene {
    type Output = GeneSlice;

    fn index(&self, index: Range<usize>) -> &Self::Output {
        self.as_gene_slice().index(index)
    }
}

impl Index<RangeFrom<usize>> for Gene {
    type Output = GeneSlice;

    fn index(&self, index: RangeFrom<usize>) -> &Self::Output {
        self.as_gene_slice().index(index)
    }
}

impl Index<RangeTo<usize>> for Gene {
    type Output = GeneSlice;

    fn index(&self, index: RangeTo<usize>) -> &Self::Output {
        self.as_gene_slice().index(index)
    }
}

impl Index<RangeFull> for Gene {
    type Output = GeneSlice;

    fn index(&self, _index: RangeFull) -> &Self::Output {
        self.as_gene_slice()
    }
}

impl Index<usize> for GeneSlice {
    type Output = Codon;

    fn index(&self, index: usize) -> &Self::Output {
        self.codons.index(index)
    }
}

impl Index<Range<usize>> for GeneSlice {
    type Output = GeneSlice;

    fn index(&self, index: Range<usize>) -> &Self::Output {
        GeneSlice::ref_cast(&self.codons[index.start..index.end])
    }
}

impl Index<RangeFrom<usize>> for GeneSlice {
    type Output = GeneSlice;

    fn index(&self, index: RangeFrom<usize>) -> &Self::Output {
        self.index(index.start..self.codons.len())
    }
}

impl Index<RangeTo<usize>> for GeneSlice {
    type Output = GeneSlice;

    fn index(&self, index: RangeTo<usize>) -> &Self::Output {
        self.index(0..index.end)
    }
}

impl FromIterator<Codon> for Gene {
    fn from_iter<T: IntoIterator<Item = Codon>>(iter: T) -> Self {
        let mut result = Self::default();
        result.extend(iter);
        result
    }
}

impl Extend<Codon> for Gene {
    fn extend<T: IntoIterator<Item = Codon>>(&mut self, iter: T) {
        self.codons.extend(iter)
    }
}

impl IntoIterator for Gene {
    type Item = Codon;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.codons.into_iter()
    }
}

impl<'a> IntoIterator for &'a Gene {
    type Item = &'a Codon;
    type IntoIter = std::slice::Iter<'a, Codon>;

    fn into_iter(self) -> Self::IntoIter {
        self.codons.iter()
    }
}

impl From<Vec<Codon>> for Gene {
    fn from(codons: Vec<Codon>) -> Self {
        Self { codons }
    }
}

impl Borrow<GeneSlice> for Gene {
    fn borrow(&self) -> &GeneSlice {
        self.as_gene_slice()
    }
}

impl ToOwned for GeneSlice {
    type Owned = Gene;

    fn to_owned(&self) -> Self::Owned {
        self.codons.iter().copied().collect()
    }
}

impl Display for Gene {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.as_gene_slice(), f)
    }
}

impl Display for GeneSlice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&encode_gene(self))
    }
}
