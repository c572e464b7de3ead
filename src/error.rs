/// Errors that can occur while seeding or querying clusters.
#[derive(Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// A mean was requested over zero points.
    EmptyInput,
    /// Two coordinate vectors of differing length met in one operation.
    DimensionMismatch { expected: usize, found: usize },
    /// `k` is zero or exceeds the number of distinct observed locations.
    InvalidClusterCount { k: usize, available: usize },
    /// A neighbour lookup needs at least two clusters.
    NoNeighbour { clusters: usize },
    /// A nearest lookup on a set with no clusters.
    NoClusters,
    /// A dimension or cluster index past the end of its collection.
    OutOfRange { index: usize, len: usize },
    /// Squared distances grew past what an `Energy` can hold.
    NonFinite,
    /// A seeding strategy name that does not parse.
    UnknownSeeding(String),
}

impl std::fmt::Display for ClusterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "there is no mean for an empty set of points"),
            Self::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {}, found {}", expected, found)
            }
            Self::InvalidClusterCount { k, available } => write!(
                f,
                "invalid cluster count: k = {} with {} distinct observations",
                k, available
            ),
            Self::NoNeighbour { clusters } => {
                write!(f, "no neighbouring cluster among {} clusters", clusters)
            }
            Self::NoClusters => write!(f, "no clusters to search"),
            Self::OutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            Self::NonFinite => write!(f, "squared distances overflowed to a non-finite value"),
            Self::UnknownSeeding(s) => write!(f, "unknown seeding strategy: {}", s),
        }
    }
}

impl std::error::Error for ClusterError {}

/// Result alias for fallible clustering operations.
pub type Result<T> = std::result::Result<T, ClusterError>;
