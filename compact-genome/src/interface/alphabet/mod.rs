//! Alphabets for genome sequences.

use std::convert::TryFrom;
use thiserror::Error;
use traitsequence::comparable::Comparable;

pub mod dna_alphabet;

/// A character in an alphabet.
pub trait AlphabetCharacter: Into<u8> + TryFrom<u8, Error = AlphabetError> + Comparable + Copy {
    /// The amount of characters in the alphabet.
    const ALPHABET_SIZE: usize;

    /// The index of this character in the alphabet.
    fn index(&self) -> usize;

    /// Constructs the character from the given index, returning an error if it is out of range.
    fn from_index(index: usize) -> Result<Self, AlphabetError>;
}

/// An alphabet as a subset of the ASCII alphabet.
pub trait Alphabet: Sized {
    /// The internal character type used by the alphabet.
    type CharacterType: AlphabetCharacter;

    /// The amount of characters in the alphabet.
    const SIZE: usize = <Self::CharacterType as AlphabetCharacter>::ALPHABET_SIZE;

    /// Converts the given ASCII character into an alphabet character.
    /// If the ASCII character is not mapped to an alphabet character, then an error is returned.
    fn ascii_to_character(ascii: u8) -> Result<Self::CharacterType, AlphabetError> {
        Self::CharacterType::try_from(ascii)
    }

    /// Converts this alphabet character into an ASCII character.
    fn character_to_ascii(character: Self::CharacterType) -> u8 {
        character.into()
    }
}

/// An error when dealing with alphabets.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum AlphabetError {
    /// An ASCII character was found that is not part of the alphabet.
    #[error("character {:?} (byte {ascii}) is not part of the alphabet", char::from(*.ascii))]
    AsciiNotPartOfAlphabet {
        /// The offending byte.
        ascii: u8,
    },

    /// A character was given that is not ASCII, and hence not part of any alphabet.
    #[error("character {character:?} is not ASCII")]
    NonAsciiCharacter {
        /// The offending character.
        character: char,
    },

    /// A character index was given that is not part of the alphabet.
    #[error("index {index} is not part of the alphabet")]
    IndexNotPartOfAlphabet {
        /// The offending index.
        index: usize,
    },

    /// A character was found inside a nucleotide string that is not part of the alphabet.
    #[error("character {:?} (byte {ascii}) at position {position} is not part of the alphabet", char::from(*.ascii))]
    InvalidSymbol {
        /// The offending byte.
        ascii: u8,
        /// The byte offset of the offending byte in the nucleotide string.
        position: usize,
    },

    /// A codon was given with a number of characters other than three.
    #[error("a codon consists of exactly three characters, but {length} were given")]
    InvalidCodonLength {
        /// The number of characters given.
        length: usize,
    },
}
