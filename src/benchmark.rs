use crate::{CliOptions, ErrorKind};
use clap::Parser;
use compact_genome::implementation::DefaultGene;
use compact_genome::interface::codon::Codon;
use compact_genome::search::{compare_search_methods, SearchReport};
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
pub struct BenchmarkCommand {
    #[clap(long, default_value = "1000", help = "The number of codons in each random gene")]
    pub gene_length: usize,

    #[clap(long, default_value = "10", help = "The number of random genes to search")]
    pub repetitions: usize,

    #[clap(long, help = "The seed of the random number generator. If not given, a random seed is used")]
    pub seed: Option<u64>,
}

/// Comparison counts collected over many searches, split by outcome.
#[derive(Default)]
struct ComparisonStatistics {
    found: Vec<f64>,
    not_found: Vec<f64>,
}

impl ComparisonStatistics {
    fn add(&mut self, report: &SearchReport) {
        if report.found {
            self.found.push(report.comparisons as f64);
        } else {
            self.not_found.push(report.comparisons as f64);
        }
    }

    fn log(&self, name: &str) {
        for (outcome, comparisons) in [("found", &self.found), ("not found", &self.not_found)] {
            if comparisons.is_empty() {
                info!("{} ({}): no searches", name, outcome);
            } else {
                info!(
                    "{} ({}): {} searches, mean {:.2} comparisons, median {:.1} comparisons",
                    name,
                    outcome,
                    comparisons.len(),
                    statistical::mean(comparisons),
                    statistical::median(comparisons),
                );
            }
        }
    }
}

pub(crate) fn benchmark_searches(
    _options: &CliOptions,
    subcommand: &BenchmarkCommand,
) -> crate::Result<()> {
    if subcommand.gene_length == 0 {
        error!("The gene length must be positive");
        return Err(ErrorKind::Parameter.into());
    }
    if subcommand.repetitions == 0 {
        error!("The number of repetitions must be positive");
        return Err(ErrorKind::Parameter.into());
    }

    let seed = subcommand.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Using seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut linear = ComparisonStatistics::default();
    let mut binary = ComparisonStatistics::default();
    for repetition in 0..subcommand.repetitions {
        let gene = random_gene(&mut rng, subcommand.gene_length).sorted();
        info!(
            "Searching all codons in random gene {}/{}",
            repetition + 1,
            subcommand.repetitions
        );

        for codon in Codon::all() {
            let comparison = compare_search_methods(&gene, codon);
            linear.add(&comparison.linear);
            binary.add(&comparison.binary);
        }
    }

    linear.log("Linear search");
    binary.log("Binary search");
    Ok(())
}

fn random_gene(rng: &mut impl Rng, len: usize) -> DefaultGene {
    (0..len)
        .map(|_| Codon::all()[rng.gen_range(0..Codon::COUNT)])
        .collect()
}
