#![recursion_limit = "1024"]

use clap::Parser;
use error_chain::{error_chain, ChainedError, ExitCode};
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

mod benchmark;
mod search;
mod sort;
mod util;

error_chain! {
    foreign_links {
        Io(std::io::Error);
        Fmt(std::fmt::Error);
        Alphabet(compact_genome::interface::alphabet::AlphabetError);
    }

    errors {
        Parameter {
            description("a parameter was missing, superfluous or had an illegal value, see the log for more details")
            display("a parameter was missing, superfluous or had an illegal value, see the log for more details")
        }

        EmptyGene {
            description("the gene contains no complete codon")
            display("the gene contains no complete codon")
        }
    }
}

#[derive(Parser)]
#[clap(name = "Codon Search", version = env!("CARGO_PKG_VERSION"), author = "Sebastian Schmidt <sebastian.schmidt@helsinki.fi>")]
struct CliOptions {
    #[clap(subcommand)]
    pub subcommand: Command,

    #[clap(
        long,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    pub log_level: LevelFilter,
}

#[derive(Parser)]
enum Command {
    #[clap(
        about = "Searches a gene for codons with both linear and binary search, and reports the comparisons each needed."
    )]
    Search(search::SearchCommand),
    #[clap(about = "Prints the codons of a gene in ascending order.")]
    Sort(sort::SortCommand),
    /// Searches random genes for every codon and logs statistics about the comparisons needed.
    Benchmark(benchmark::BenchmarkCommand),
}

// The main is unpacked from an error-chain macro.
// The real main (programmed manually) is run(), below this method.
fn main() {
    ::std::process::exit(match run() {
        Ok(()) => ExitCode::code(()),
        Err(ref e) => {
            error!("{}", ChainedError::display_chain(e));
            1
        }
    });
}

fn initialise_logging(level_filter: LevelFilter) {
    if let Err(error) = CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]) {
        eprintln!("Could not initialise logging: {}", error);
        return;
    }

    info!("Logging initialised successfully");
}

fn run() -> Result<()> {
    let options = &CliOptions::parse();
    initialise_logging(options.log_level);

    match &options.subcommand {
        Command::Search(subcommand) => search::search_codons(options, subcommand),
        Command::Sort(subcommand) => sort::sort_gene(options, subcommand),
        Command::Benchmark(subcommand) => benchmark::benchmark_searches(options, subcommand),
    }?;

    info!("Goodbye");
    Ok(())
}
