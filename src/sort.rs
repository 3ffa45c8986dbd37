use crate::util::decode_gene;
use crate::CliOptions;
use clap::Parser;
use compact_genome::implementation::DefaultGene;
use log::info;
use std::io::Write;
use traitsequence::interface::Sequence;

#[derive(Parser)]
pub struct SortCommand {
    #[clap(
        long,
        help = "The gene as string over A, C, G and T. If not given, a demo gene is used"
    )]
    pub gene: Option<String>,

    #[clap(
        long,
        help = "Truncate the gene at the first codon with an invalid character instead of failing"
    )]
    pub lenient: bool,
}

pub(crate) fn sort_gene(_options: &CliOptions, subcommand: &SortCommand) -> crate::Result<()> {
    let gene = decode_gene(subcommand.gene.as_deref(), subcommand.lenient)?;
    log_sortedness(&gene);

    let gene = gene.sorted();
    info!(
        "Sorted gene ranges from {} to {}",
        gene.first().map(ToString::to_string).unwrap_or_default(),
        gene.last().map(ToString::to_string).unwrap_or_default(),
    );

    writeln!(std::io::stdout(), "{}", gene)?;
    Ok(())
}

/// Logs whether `gene` is sorted ascending, and returns the answer.
fn log_sortedness(gene: &DefaultGene) -> bool {
    let is_ascending = gene.is_ascending();
    if is_ascending {
        info!("The gene is already sorted");
    } else {
        info!("The gene is not sorted");
    }
    is_ascending
}

#[cfg(test)]
mod tests {
    use crate::sort::log_sortedness;
    use crate::util::DEMO_GENE;
    use compact_genome::encoding::decode_sequence;

    #[test]
    fn test_log_sortedness() {
        let gene = decode_sequence(DEMO_GENE).unwrap();
        assert!(!log_sortedness(&gene));
        assert!(log_sortedness(&gene.sorted()));
        assert!(log_sortedness(&decode_sequence("AAAACG").unwrap()));
    }
}
