use crate::interface::codon::Codon;
use log::debug;
use std::fmt::{Display, Formatter};
use traitsequence::interface::Sequence;
use traitsequence::search::{binary_contains_observed, linear_contains_observed, ComparisonCounter};

/// The strategy used to search a gene for a codon.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SearchStrategy {
    /// Check every codon in order. Works on any gene.
    Linear,
    /// Narrow down by halving. Requires the gene to be sorted.
    Binary,
}

/// The outcome and cost of searching a gene for a codon.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SearchReport {
    /// The strategy that was used.
    pub strategy: SearchStrategy,
    /// The codon that was searched for.
    pub target: Codon,
    /// True if the codon was found.
    pub found: bool,
    /// The number of comparisons spent.
    /// For linear search, this is the number of visited codons,
    /// for binary search it is the number of halving steps.
    pub comparisons: usize,
}

/// The reports of searching the same gene for the same codon with both strategies.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SearchComparison {
    /// The report of the linear search.
    pub linear: SearchReport,
    /// The report of the binary search.
    pub binary: SearchReport,
}

/// Searches `gene` for `target` by visiting its codons in order.
/// The gene does not need to be sorted.
pub fn linear_codon_search<'a, Subsequence, GeneType>(
    gene: &'a GeneType,
    target: &Codon,
) -> SearchReport
where
    Subsequence: Sequence<'a, Codon, Subsequence> + ?Sized,
    GeneType: Sequence<'a, Codon, Subsequence> + ?Sized,
{
    let mut counter = ComparisonCounter::new();
    let found = linear_contains_observed(gene.iter(), target, &mut counter);
    let report = SearchReport {
        strategy: SearchStrategy::Linear,
        target: *target,
        found,
        comparisons: counter.comparisons(),
    };
    debug!("{:?}", report);
    report
}

/// Searches `gene` for `target` by binary search.
///
/// The gene must be sorted ascending, for example by [Gene::sort](crate::implementation::gene::Gene::sort).
/// This is not checked, and if it does not hold the result is unspecified.
pub fn binary_codon_search<'a, Subsequence, GeneType>(
    gene: &'a GeneType,
    target: &Codon,
) -> SearchReport
where
    Subsequence: Sequence<'a, Codon, Subsequence> + ?Sized,
    GeneType: Sequence<'a, Codon, Subsequence> + ?Sized,
{
    let mut counter = ComparisonCounter::new();
    let found = binary_contains_observed(gene, target, &mut counter);
    let report = SearchReport {
        strategy: SearchStrategy::Binary,
        target: *target,
        found,
        comparisons: counter.comparisons(),
    };
    debug!("{:?}", report);
    report
}

/// Searches the sorted `gene` for `target` with both strategies and returns both reports.
///
/// Panics if the strategies disagree on whether the codon is contained.
/// That only happens if `gene` is not sorted, or if one of the strategies is broken.
///
/// ```rust
/// use compact_genome::encoding::decode_sequence;
/// use compact_genome::search::compare_search_methods;
///
/// let gene = decode_sequence("TTTGATACGCCC").unwrap().sorted();
/// let comparison = compare_search_methods(&gene, &"GAT".parse().unwrap());
/// assert!(comparison.linear.found);
/// assert!(comparison.binary.found);
/// ```
pub fn compare_search_methods<'a, Subsequence, GeneType>(
    gene: &'a GeneType,
    target: &Codon,
) -> SearchComparison
where
    Subsequence: Sequence<'a, Codon, Subsequence> + ?Sized,
    GeneType: Sequence<'a, Codon, Subsequence> + ?Sized,
{
    let linear = linear_codon_search(gene, target);
    let binary = binary_codon_search(gene, target);
    assert_eq!(
        linear.found, binary.found,
        "linear and binary search disagree on whether {} is contained in the gene",
        target
    );
    SearchComparison { linear, binary }
}

impl Display for SearchStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStrategy::Linear => write!(f, "Linear Search"),
            SearchStrategy::Binary => write!(f, "Binary Search"),
        }
    }
}

impl Display for SearchReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.strategy)?;
        if self.found {
            writeln!(f, "\tSequence {} Found!", self.target)?;
        } else {
            writeln!(f, "\tSequence {} not found", self.target)?;
        }
        write!(f, "\tNumber of comparisons: {}", self.comparisons)
    }
}

#[cfg(test)]
mod tests {
    use crate::encoding::decode_sequence;
    use crate::implementation::gene::Gene;
    use crate::interface::alphabet::dna_alphabet::Nucleotide::{A, C, G, T};
    use crate::interface::codon::Codon;
    use crate::search::{
        binary_codon_search, compare_search_methods, linear_codon_search, SearchStrategy,
    };
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use traitsequence::interface::Sequence;

    const DEMO_GENE: &str = "ACGTGGCTCTCTAACGTACGTACGTACGGGGTTTATATATACCCTAGGACTCCCTTT";

    #[test]
    fn test_demo_gene() {
        let gene = decode_sequence(DEMO_GENE).unwrap().sorted();
        assert_eq!(
            gene.to_string(),
            "AACACGACGACTAGGATACCCCCTCGTCTCGGGGTAGTTTACTACTATTCTTGGTTT"
        );

        let found = compare_search_methods(&gene, &Codon::new(A, C, G));
        assert!(found.linear.found);
        assert!(found.binary.found);
        assert_eq!(found.linear.comparisons, 2);
        assert_eq!(found.binary.comparisons, 3);

        let not_found = compare_search_methods(&gene, &Codon::new(G, A, T));
        assert!(!not_found.linear.found);
        assert!(!not_found.binary.found);
        assert_eq!(not_found.linear.comparisons, gene.len());
        assert_eq!(not_found.binary.comparisons, 4);
    }

    #[test]
    fn test_empty_gene() {
        let gene = Gene::new();
        for codon in Codon::all() {
            let comparison = compare_search_methods(&gene, codon);
            assert!(!comparison.linear.found);
            assert!(!comparison.binary.found);
            assert_eq!(comparison.linear.comparisons, 0);
            assert_eq!(comparison.binary.comparisons, 0);
        }
    }

    #[test]
    fn test_linear_search_on_unsorted_gene() {
        let gene = decode_sequence("TTTGATACG").unwrap();
        let report = linear_codon_search(&gene, &Codon::new(G, A, T));
        assert_eq!(report.strategy, SearchStrategy::Linear);
        assert!(report.found);
        assert_eq!(report.comparisons, 2);
        assert!(!linear_codon_search(&gene, &Codon::new(C, C, C)).found);
    }

    #[test]
    fn test_search_on_gene_slice() {
        let gene = decode_sequence("AAACCCGGGTTT").unwrap();
        let report = binary_codon_search(&gene[1..3], &Codon::new(T, T, T));
        assert_eq!(report.strategy, SearchStrategy::Binary);
        assert!(!report.found);
        assert!(binary_codon_search(&gene[1..], &Codon::new(T, T, T)).found);
    }

    #[test]
    fn test_agreement_on_random_genes() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let len = rng.gen_range(0..80);
            let gene: Gene = (0..len)
                .map(|_| Codon::all()[rng.gen_range(0..Codon::COUNT)])
                .collect();
            let sorted = gene.clone().sorted();

            for target in Codon::all() {
                let linear = linear_codon_search(&gene, target);
                let comparison = compare_search_methods(&sorted, target);
                assert_eq!(linear.found, comparison.binary.found);
                assert_eq!(linear.found, comparison.linear.found);

                let log_bound = usize::BITS - sorted.len().leading_zeros();
                assert!(comparison.binary.comparisons <= log_bound as usize);
                assert!(linear.comparisons <= gene.len());
            }
        }
    }

    #[test]
    #[should_panic(expected = "disagree")]
    fn test_disagreement_on_unsorted_gene_panics() {
        // Binary search starts at CCC and only looks to its right, missing TTT.
        let gene = decode_sequence("AAATTTCCCGGGGGG").unwrap();
        compare_search_methods(&gene, &Codon::new(T, T, T));
    }

    #[test]
    fn test_report_display() {
        let gene = decode_sequence("ACGGAT").unwrap();
        let report = linear_codon_search(&gene, &Codon::new(A, C, G));
        assert_eq!(
            report.to_string(),
            "Linear Search\n\tSequence ACG Found!\n\tNumber of comparisons: 1"
        );
        let report = binary_codon_search(&gene, &Codon::new(T, T, T));
        assert_eq!(
            report.to_string(),
            "Binary Search\n\tSequence TTT not found\n\tNumber of comparisons: 2"
        );
    }
}
