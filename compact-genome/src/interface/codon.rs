//! Codons, i.e. triples of nucleotides.

use crate::interface::alphabet::dna_alphabet::{DnaAlphabet, Nucleotide};
use crate::interface::alphabet::{Alphabet, AlphabetCharacter, AlphabetError};
use lazy_static::lazy_static;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use traitsequence::comparable::Comparable;

/// An ordered triple of nucleotides.
///
/// Codons are compared lexicographically by the [ranks](Nucleotide::rank) of their nucleotides.
/// A codon always consists of exactly three nucleotides.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Codon {
    nucleotides: [Nucleotide; 3],
}

lazy_static! {
    static ref CODON_TABLE: Vec<Codon> = (0..Codon::COUNT).map(Codon::from_index_wrapping).collect();
}

impl Codon {
    /// The number of nucleotides in a codon.
    pub const LEN: usize = 3;

    /// The number of distinct codons.
    pub const COUNT: usize = DnaAlphabet::SIZE * DnaAlphabet::SIZE * DnaAlphabet::SIZE;

    /// Creates a codon from its three nucleotides.
    pub fn new(first: Nucleotide, second: Nucleotide, third: Nucleotide) -> Self {
        Self {
            nucleotides: [first, second, third],
        }
    }

    /// All codons in ascending order.
    pub fn all() -> &'static [Codon] {
        &CODON_TABLE
    }

    /// The nucleotides of this codon.
    pub fn nucleotides(&self) -> [Nucleotide; 3] {
        self.nucleotides
    }

    /// The ranks of the nucleotides of this codon.
    pub fn ranks(&self) -> [u8; 3] {
        [
            self.nucleotides[0].rank(),
            self.nucleotides[1].rank(),
            self.nucleotides[2].rank(),
        ]
    }

    /// The index of this codon in [all()](Codon::all).
    /// Indices are dense in `[0, 64)` and ascending with the codon order.
    pub fn index(&self) -> usize {
        self.nucleotides
            .iter()
            .fold(0, |index, nucleotide| index * DnaAlphabet::SIZE + nucleotide.index())
    }

    /// Constructs the codon with the given index, returning an error if it is out of range.
    pub fn from_index(index: usize) -> Result<Self, AlphabetError> {
        if index < Self::COUNT {
            Ok(Self::from_index_wrapping(index))
        } else {
            Err(AlphabetError::IndexNotPartOfAlphabet { index })
        }
    }

    fn from_index_wrapping(index: usize) -> Self {
        let nucleotide = |position: u32| {
            Nucleotide::all()[index / DnaAlphabet::SIZE.pow(position) % DnaAlphabet::SIZE]
        };
        Self::new(nucleotide(2), nucleotide(1), nucleotide(0))
    }

    /// Constructs a codon from exactly three ASCII characters.
    pub fn from_ascii(ascii: &[u8]) -> Result<Self, AlphabetError> {
        match ascii {
            [first, second, third] => Ok(Self::new(
                DnaAlphabet::ascii_to_character(*first)?,
                DnaAlphabet::ascii_to_character(*second)?,
                DnaAlphabet::ascii_to_character(*third)?,
            )),
            _ => Err(AlphabetError::InvalidCodonLength {
                length: ascii.len(),
            }),
        }
    }
}

impl From<[Nucleotide; 3]> for Codon {
    fn from(nucleotides: [Nucleotide; 3]) -> Self {
        Self { nucleotides }
    }
}

impl From<(Nucleotide, Nucleotide, Nucleotide)> for Codon {
    fn from((first, second, third): (Nucleotide, Nucleotide, Nucleotide)) -> Self {
        Self::new(first, second, third)
    }
}

impl TryFrom<&[u8]> for Codon {
    type Error = AlphabetError;

    fn try_from(ascii: &[u8]) -> Result<Self, Self::Error> {
        Self::from_ascii(ascii)
    }
}

impl FromStr for Codon {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(character) = s.chars().find(|character| !character.is_ascii()) {
            return Err(AlphabetError::NonAsciiCharacter { character });
        }
        Self::from_ascii(s.as_bytes())
    }
}

impl Comparable for Codon {
    fn is_less(&self, other: &Self) -> bool {
        for (own, others) in self.nucleotides.iter().zip(other.nucleotides.iter()) {
            if own.is_less(others) {
                return true;
            }
            if own.is_greater(others) {
                return false;
            }
        }
        false
    }
}

impl Ord for Codon {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Codon {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Codon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for nucleotide in &self.nucleotides {
            write!(f, "{}", nucleotide)?;
        }
        Ok(())
    }
}
