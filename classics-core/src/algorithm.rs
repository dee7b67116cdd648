//! Selection of an algorithm by its demo name.

use std::{fmt, str::FromStr};

use crate::error::{AlgorithmError, ExpectedNames};

/// The algorithms exposed by the library.
///
/// # Examples
/// ```
/// use classics_core::Algorithm;
///
/// let algorithm: Algorithm = "mst".parse()?;
/// assert_eq!(algorithm, Algorithm::Kruskal);
/// assert_eq!(algorithm.as_str(), "kruskal");
/// # Ok::<(), classics_core::AlgorithmError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Single-source shortest paths.
    Dijkstra,
    /// Minimum spanning forest.
    Kruskal,
    /// Kahn's topological ordering.
    TopologicalSort,
    /// Binary search with lower and upper bounds.
    BinarySearch,
    /// Stable merge sort.
    MergeSort,
}

impl Algorithm {
    /// Every algorithm, in presentation order.
    pub const ALL: [Self; 5] = [
        Self::Dijkstra,
        Self::Kruskal,
        Self::TopologicalSort,
        Self::BinarySearch,
        Self::MergeSort,
    ];

    /// Returns the canonical name used on the command line and in documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::Kruskal => "kruskal",
            Self::TopologicalSort => "topsort",
            Self::BinarySearch => "bsearch",
            Self::MergeSort => "mergesort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = AlgorithmError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Self::Dijkstra),
            "kruskal" | "mst" => Ok(Self::Kruskal),
            "topsort" => Ok(Self::TopologicalSort),
            "bsearch" => Ok(Self::BinarySearch),
            "mergesort" => Ok(Self::MergeSort),
            _ => Err(AlgorithmError::Unknown {
                name: raw.to_owned(),
                expected: ExpectedNames,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::AlgorithmErrorCode;

    #[rstest]
    #[case("dijkstra", Algorithm::Dijkstra)]
    #[case("kruskal", Algorithm::Kruskal)]
    #[case("mst", Algorithm::Kruskal)]
    #[case(" TopSort ", Algorithm::TopologicalSort)]
    #[case("bsearch", Algorithm::BinarySearch)]
    #[case("mergesort", Algorithm::MergeSort)]
    fn parses_known_names(#[case] raw: &str, #[case] expected: Algorithm) {
        assert_eq!(raw.parse::<Algorithm>(), Ok(expected));
    }

    #[test]
    fn canonical_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn rejects_unknown_names_with_stable_code() {
        let err = "quicksort"
            .parse::<Algorithm>()
            .expect_err("quicksort is not provided");
        assert_eq!(err.code(), AlgorithmErrorCode::Unknown);
        assert_eq!(err.code().as_str(), "UNKNOWN_ALGORITHM");
        assert_eq!(
            err.to_string(),
            "unknown algorithm `quicksort`; expected one of: dijkstra, kruskal, topsort, bsearch, mergesort"
        );
    }
}
