use crate::util::decode_gene;
use crate::CliOptions;
use clap::Parser;
use colored::Colorize;
use compact_genome::interface::codon::Codon;
use compact_genome::search::{compare_search_methods, linear_codon_search, SearchReport};
use log::{info, warn};
use std::io::Write;

/// The codons searched if none are given on the command line.
pub const DEFAULT_CODONS: [&str; 2] = ["ACG", "GAT"];

#[derive(Parser)]
pub struct SearchCommand {
    #[clap(
        long,
        help = "The gene as string over A, C, G and T. If not given, a demo gene is used"
    )]
    pub gene: Option<String>,

    #[clap(
        long = "codon",
        help = "A codon to search for, can be given multiple times. If not given, ACG and GAT are searched"
    )]
    pub codons: Vec<Codon>,

    #[clap(
        long,
        help = "Do not sort the gene before searching. Binary search needs a sorted gene, so only linear search is run"
    )]
    pub no_sort: bool,

    #[clap(
        long,
        help = "Truncate the gene at the first codon with an invalid character instead of failing"
    )]
    pub lenient: bool,
}

pub(crate) fn search_codons(_options: &CliOptions, subcommand: &SearchCommand) -> crate::Result<()> {
    let mut gene = decode_gene(subcommand.gene.as_deref(), subcommand.lenient)?;
    let codons = if subcommand.codons.is_empty() {
        DEFAULT_CODONS
            .iter()
            .map(|codon| codon.parse())
            .collect::<Result<Vec<Codon>, _>>()?
    } else {
        subcommand.codons.clone()
    };

    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    if subcommand.no_sort {
        warn!("The gene is not sorted, running only linear search");
        writeln!(output, "{}\n", gene)?;
        for codon in &codons {
            write_report(&mut output, &linear_codon_search(&gene, codon))?;
        }
    } else {
        info!("Sorting gene...");
        gene.sort();
        writeln!(output, "{}\n", gene)?;
        for codon in &codons {
            info!("Searching for {}", codon);
            let comparison = compare_search_methods(&gene, codon);
            write_report(&mut output, &comparison.linear)?;
            write_report(&mut output, &comparison.binary)?;
        }
    }

    Ok(())
}

fn write_report(output: &mut impl Write, report: &SearchReport) -> crate::Result<()> {
    let report_text = report.to_string();
    let report_text = if report.found {
        report_text.green()
    } else {
        report_text.red()
    };

    writeln!(output, "{}\n", report_text)?;
    Ok(())
}
