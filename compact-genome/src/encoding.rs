use crate::implementation::gene::Gene;
use crate::interface::alphabet::dna_alphabet::{DnaAlphabet, Nucleotide};
use crate::interface::alphabet::{Alphabet, AlphabetError};
use crate::interface::codon::Codon;
use itertools::Itertools;
use log::{debug, warn};
use traitsequence::interface::Sequence;

/// Decodes a nucleotide string into a gene.
///
/// The string is read left to right in non-overlapping windows of three characters, each becoming one codon.
/// If the length of the string is not a multiple of three, the incomplete window at its end is dropped,
/// so the resulting gene has `raw.len() / 3` codons.
///
/// Returns an error naming the first character that is not one of `A`, `C`, `G` or `T`.
/// This includes the characters of the dropped incomplete window.
///
/// ```rust
/// use compact_genome::encoding::{decode_sequence, encode_gene};
///
/// let gene = decode_sequence("ACGTTTA").unwrap();
/// assert_eq!(encode_gene(&gene), "ACGTTT");
/// assert!(decode_sequence("ACGTXT").is_err());
/// assert!(decode_sequence("ACGX").is_err());
/// ```
pub fn decode_sequence(raw: &str) -> Result<Gene, AlphabetError> {
    log_incomplete_window(raw);
    let gene = raw
        .bytes()
        .tuples::<(u8, u8, u8)>()
        .enumerate()
        .map(|(window, (first, second, third))| decode_window(window, [first, second, third]))
        .collect::<Result<Gene, _>>()?;
    check_incomplete_window(raw)?;
    Ok(gene)
}

/// Decodes a nucleotide string into a gene, stopping at the first window that contains an invalid character.
///
/// Like [decode_sequence], but instead of failing on an invalid character, the gene is truncated before the codon it would belong to.
/// Characters in the dropped incomplete window are not checked.
/// This silently hides malformed input, so prefer [decode_sequence] unless truncation is what you want.
pub fn decode_sequence_truncating(raw: &str) -> Gene {
    log_incomplete_window(raw);
    let mut gene = Gene::with_capacity(raw.len() / Codon::LEN);
    for (window, (first, second, third)) in raw.bytes().tuples::<(u8, u8, u8)>().enumerate() {
        match decode_window(window, [first, second, third]) {
            Ok(codon) => gene.push(codon),
            Err(error) => {
                warn!("Truncating gene after {} codons: {}", window, error);
                break;
            }
        }
    }
    gene
}

/// Encodes a codon as its three single-letter nucleotide symbols.
pub fn encode_codon(codon: &Codon) -> String {
    codon
        .nucleotides()
        .iter()
        .map(Nucleotide::symbol)
        .collect()
}

/// Encodes a gene as the concatenation of its [encoded codons](encode_codon).
///
/// This is the inverse of [decode_sequence] for strings whose length is a multiple of three.
pub fn encode_gene<'a, Subsequence, GeneType>(gene: &'a GeneType) -> String
where
    Subsequence: Sequence<'a, Codon, Subsequence> + ?Sized,
    GeneType: Sequence<'a, Codon, Subsequence> + ?Sized,
{
    let mut result = String::with_capacity(gene.len() * Codon::LEN);
    for codon in gene.iter() {
        result.push_str(&encode_codon(codon));
    }
    result
}

fn decode_window(window: usize, ascii: [u8; 3]) -> Result<Codon, AlphabetError> {
    let mut nucleotides = [Nucleotide::A; 3];
    for (offset, (character, nucleotide)) in ascii.iter().zip(nucleotides.iter_mut()).enumerate() {
        *nucleotide = DnaAlphabet::ascii_to_character(*character).map_err(|_| {
            AlphabetError::InvalidSymbol {
                ascii: *character,
                position: window * Codon::LEN + offset,
            }
        })?;
    }
    Ok(Codon::from(nucleotides))
}

fn check_incomplete_window(raw: &str) -> Result<(), AlphabetError> {
    let start = raw.len() - raw.len() % Codon::LEN;
    for (position, character) in raw.bytes().enumerate().skip(start) {
        DnaAlphabet::ascii_to_character(character).map_err(|_| AlphabetError::InvalidSymbol {
            ascii: character,
            position,
        })?;
    }
    Ok(())
}

fn log_incomplete_window(raw: &str) {
    let remainder = raw.len() % Codon::LEN;
    if remainder != 0 {
        debug!(
            "Dropping {} trailing characters that do not form a complete codon",
            remainder
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::encoding::{decode_sequence, decode_sequence_truncating, encode_codon, encode_gene};
    use crate::implementation::gene::Gene;
    use crate::interface::alphabet::dna_alphabet::Nucleotide::{A, C, G, T};
    use crate::interface::alphabet::AlphabetError;
    use crate::interface::codon::Codon;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use traitsequence::interface::Sequence;

    fn random_nucleotide_string(rng: &mut StdRng, len: usize) -> String {
        (0..len)
            .map(|_| *b"ACGT".choose(rng).unwrap() as char)
            .collect()
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_sequence("").unwrap(), Gene::new());
        assert_eq!(decode_sequence_truncating(""), Gene::new());
    }

    #[test]
    fn test_decode_single_codon() {
        let gene = decode_sequence("ACG").unwrap();
        assert_eq!(gene, Gene::from(vec![Codon::new(A, C, G)]));
        assert_eq!(encode_gene(&gene), "ACG");
    }

    #[test]
    fn test_decode_drops_incomplete_window() {
        assert_eq!(decode_sequence("A").unwrap().len(), 0);
        assert_eq!(decode_sequence("AC").unwrap().len(), 0);
        let gene = decode_sequence("GATTA").unwrap();
        assert_eq!(gene, Gene::from(vec![Codon::new(G, A, T)]));
    }

    #[test]
    fn test_decode_rejects_invalid_symbol_in_incomplete_window() {
        assert_eq!(
            decode_sequence("GATX"),
            Err(AlphabetError::InvalidSymbol {
                ascii: b'X',
                position: 3
            })
        );
        assert_eq!(
            decode_sequence("GATTX"),
            Err(AlphabetError::InvalidSymbol {
                ascii: b'X',
                position: 4
            })
        );
        assert_eq!(
            decode_sequence("N"),
            Err(AlphabetError::InvalidSymbol {
                ascii: b'N',
                position: 0
            })
        );
        // An invalid complete window is reported before the incomplete one.
        assert_eq!(
            decode_sequence("GAXTX"),
            Err(AlphabetError::InvalidSymbol {
                ascii: b'X',
                position: 2
            })
        );
        // The lenient decoder still drops the incomplete window unchecked.
        assert_eq!(decode_sequence_truncating("GATX").len(), 1);
    }

    #[test]
    fn test_decode_invalid_symbol() {
        assert_eq!(
            decode_sequence("ACGTxA"),
            Err(AlphabetError::InvalidSymbol {
                ascii: b'x',
                position: 4
            })
        );
        assert_eq!(
            decode_sequence("NCG"),
            Err(AlphabetError::InvalidSymbol {
                ascii: b'N',
                position: 0
            })
        );
    }

    #[test]
    fn test_decode_truncating_stops_at_invalid_window() {
        let gene = decode_sequence_truncating("ACGTTTANTGGG");
        assert_eq!(encode_gene(&gene), "ACGTTT");
        assert_eq!(decode_sequence_truncating("acg"), Gene::new());
    }

    #[test]
    fn test_encode_codon() {
        assert_eq!(encode_codon(&Codon::new(G, A, T)), "GAT");
        for codon in Codon::all() {
            let encoded = encode_codon(codon);
            assert_eq!(encoded.len(), 3);
            assert_eq!(encoded, codon.to_string());
        }
    }

    #[test]
    fn test_round_trip_and_truncation_laws() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let len = rng.gen_range(0..200);
            let raw = random_nucleotide_string(&mut rng, len);
            let gene = decode_sequence(&raw).unwrap();
            assert_eq!(gene.len(), raw.len() / 3);
            assert_eq!(decode_sequence_truncating(&raw), gene);

            let complete = &raw[..raw.len() - raw.len() % 3];
            assert_eq!(encode_gene(&gene), complete);
            assert_eq!(encode_gene(gene.as_gene_slice()), complete);
        }
    }
}
