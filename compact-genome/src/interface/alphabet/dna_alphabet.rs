//! The DNA alphabet, consisting of the nucleotides A, C, G and T.

use crate::interface::alphabet::{Alphabet, AlphabetCharacter, AlphabetError};
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt::{Display, Formatter};
use traitsequence::comparable::Comparable;

/// A nucleotide, i.e. a character of the DNA alphabet: A, C, G or T.
///
/// Nucleotides are ordered by their [rank](Nucleotide::rank) and nothing else.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Nucleotide {
    /// Adenine.
    A,
    /// Cytosine.
    C,
    /// Guanine.
    G,
    /// Thymine.
    T,
}

/// The DNA alphabet, consisting of characters A, C, G and T.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct DnaAlphabet;

/// All nucleotides, by index.
static NUCLEOTIDE_TABLE: [Nucleotide; DnaAlphabet::SIZE] =
    [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

/// The rank of each nucleotide, by index. Ranks start at 1.
static NUCLEOTIDE_RANK_TABLE: [u8; DnaAlphabet::SIZE] = [1, 2, 3, 4];

static NUCLEOTIDE_TO_ASCII_TABLE: [u8; DnaAlphabet::SIZE] = [b'A', b'C', b'G', b'T'];

/// Maps ASCII to nucleotide indices, with 4 marking characters outside the alphabet.
static ASCII_TO_NUCLEOTIDE_TABLE: [u8; 256] = [
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 0, 4, 1, 4, 4, 4, 2, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
];

impl Nucleotide {
    /// All nucleotides in ascending order.
    pub fn all() -> &'static [Nucleotide] {
        &NUCLEOTIDE_TABLE
    }

    /// The rank of this nucleotide: A = 1, C = 2, G = 3, T = 4.
    pub fn rank(&self) -> u8 {
        NUCLEOTIDE_RANK_TABLE[self.index()]
    }

    /// The single-letter symbol of this nucleotide.
    pub fn symbol(&self) -> char {
        char::from(u8::from(*self))
    }
}

impl From<Nucleotide> for u8 {
    fn from(nucleotide: Nucleotide) -> u8 {
        NUCLEOTIDE_TO_ASCII_TABLE[nucleotide.index()]
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = AlphabetError;

    fn try_from(ascii: u8) -> Result<Self, Self::Error> {
        Self::from_index(ASCII_TO_NUCLEOTIDE_TABLE[ascii as usize] as usize)
            .map_err(|_| AlphabetError::AsciiNotPartOfAlphabet { ascii })
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = AlphabetError;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        if character.is_ascii() {
            Self::try_from(character as u8)
        } else {
            Err(AlphabetError::NonAsciiCharacter { character })
        }
    }
}

impl AlphabetCharacter for Nucleotide {
    const ALPHABET_SIZE: usize = 4;

    fn index(&self) -> usize {
        match self {
            Nucleotide::A => 0,
            Nucleotide::C => 1,
            Nucleotide::G => 2,
            Nucleotide::T => 3,
        }
    }

    fn from_index(index: usize) -> Result<Self, AlphabetError> {
        NUCLEOTIDE_TABLE
            .get(index)
            .copied()
            .ok_or(AlphabetError::IndexNotPartOfAlphabet { index })
    }
}

impl Comparable for Nucleotide {
    fn is_less(&self, other: &Self) -> bool {
        self.rank() < other.rank()
    }
}

impl Ord for Nucleotide {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Nucleotide {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Nucleotide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Alphabet for DnaAlphabet {
    type CharacterType = Nucleotide;
}

#[cfg(test)]
mod tests {
    use crate::interface::alphabet::dna_alphabet::{DnaAlphabet, Nucleotide};
    use crate::interface::alphabet::{Alphabet, AlphabetCharacter, AlphabetError};
    use std::convert::TryFrom;
    use traitsequence::comparable::Comparable;

    #[test]
    fn test_dna_alphabet_conversion() {
        for ascii in 0u8..=255u8 {
            if ascii == b'A' || ascii == b'C' || ascii == b'G' || ascii == b'T' {
                assert_eq!(
                    u8::from(Nucleotide::try_from(ascii).unwrap_or_else(|_| panic!(
                        "character {} was expected to be valid, but is not",
                        ascii
                    ))),
                    ascii
                );
            } else {
                assert_eq!(
                    Nucleotide::try_from(ascii),
                    Err(AlphabetError::AsciiNotPartOfAlphabet { ascii })
                );
            }
        }
    }

    #[test]
    fn test_lowercase_is_invalid() {
        assert!(DnaAlphabet::ascii_to_character(b'a').is_err());
        assert!(Nucleotide::try_from('t').is_err());
        assert_eq!(
            Nucleotide::try_from('ä'),
            Err(AlphabetError::NonAsciiCharacter { character: 'ä' })
        );
        assert_eq!(Nucleotide::try_from('G'), Ok(Nucleotide::G));
    }

    #[test]
    fn test_ranks() {
        let ranks: Vec<_> = Nucleotide::all().iter().map(Nucleotide::rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        assert_eq!(Nucleotide::A.rank(), 1);
        assert_eq!(Nucleotide::T.rank(), 4);
    }

    #[test]
    fn test_order_follows_rank() {
        for a in Nucleotide::all() {
            for b in Nucleotide::all() {
                assert_eq!(a.is_less(b), a.rank() < b.rank());
                assert_eq!(a.cmp(b), a.rank().cmp(&b.rank()));
            }
        }
        assert!(Nucleotide::A < Nucleotide::C);
        assert!(Nucleotide::G < Nucleotide::T);
    }

    #[test]
    fn test_index_round_trip() {
        for index in 0..DnaAlphabet::SIZE {
            let nucleotide = Nucleotide::from_index(index).unwrap();
            assert_eq!(nucleotide.index(), index);
            assert_eq!(usize::from(nucleotide.rank()), index + 1);
        }
        assert_eq!(
            Nucleotide::from_index(4),
            Err(AlphabetError::IndexNotPartOfAlphabet { index: 4 })
        );
    }

    #[test]
    fn test_display() {
        let symbols: String = Nucleotide::all().iter().map(ToString::to_string).collect();
        assert_eq!(symbols, "ACGT");
        assert_eq!(DnaAlphabet::character_to_ascii(Nucleotide::C), b'C');
    }
}
