use crate::{Error, ErrorKind};
use compact_genome::encoding::{decode_sequence, decode_sequence_truncating};
use compact_genome::implementation::DefaultGene;
use log::{error, info};
use traitsequence::interface::Sequence;

/// The gene searched if none is given on the command line.
pub const DEMO_GENE: &str = "ACGTGGCTCTCTAACGTACGTACGTACGGGGTTTATATATACCCTAGGACTCCCTTT";

/// Decodes the gene given on the command line, or the demo gene if none was given.
///
/// With `lenient`, the gene is truncated at the first invalid character instead of failing.
pub fn decode_gene(raw: Option<&str>, lenient: bool) -> crate::Result<DefaultGene> {
    let raw = raw.unwrap_or_else(|| {
        info!("No gene given, using the demo gene");
        DEMO_GENE
    });

    let gene = if lenient {
        decode_sequence_truncating(raw)
    } else {
        decode_sequence(raw).map_err(|e| {
            error!("The gene is not a valid nucleotide string");
            Error::from(e)
        })?
    };

    if gene.is_empty() {
        error!("The gene is empty");
        return Err(ErrorKind::EmptyGene.into());
    }

    info!(
        "Decoded gene of {} codons from {} characters",
        gene.len(),
        raw.len()
    );
    Ok(gene)
}
