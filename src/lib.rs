//! Weighted k-means primitives.
//!
//! This crate holds the pieces an iterative refinement loop needs to cluster
//! weighted points in n dimensions: a distance, a weighted centroid, cluster
//! membership bookkeeping, and a few ways to pick initial centers. The loop
//! itself (when to stop, how many passes) belongs to the caller.
//!
//! ## Core Types
//!
//! - [`Observation`] — Anything with coordinates and a weight
//! - [`Point`] — The default owned, weighted observation
//! - [`Cluster`] — A center plus borrowed member observations
//! - [`ClusterSet`] — Ordered clusters with nearest/neighbour queries
//!
//! ## Seeding
//!
//! - [`Seeding::Uniform`] — Distinct observations drawn uniformly
//! - [`Seeding::Spread`] — Greedy farthest-point traversal
//! - [`Seeding::PlusPlus`] — Weighted k-means++
//!
//! ## A Refinement Pass
//!
//! ```
//! use kmeans_core::*;
//! use rand::SeedableRng;
//!
//! let points = vec![
//!     Point::new(vec![1., 1.], 1),
//!     Point::new(vec![1., 2.], 1),
//!     Point::new(vec![9., 9.], 1),
//! ];
//! let ref mut rng = rand::rngs::SmallRng::seed_from_u64(0);
//! let mut clusters = ClusterSet::spread(2, &points, rng)?;
//! for point in points.iter() {
//!     clusters.assign(point)?;
//! }
//! clusters.recenter()?;
//! assert_eq!(clusters.len(), 2);
//! # Ok::<(), ClusterError>(())
//! ```
mod cluster;
mod clusters;
mod error;
mod observation;
mod seeding;
mod vector;

#[cfg(test)]
mod tests;

pub use cluster::*;
pub use clusters::*;
pub use error::*;
pub use observation::*;
pub use seeding::*;
pub use vector::*;

#[cfg(test)]
use tests::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Coordinates, distances, and losses.
pub type Energy = f64;
/// Observation weights. Never zero for a well-formed observation.
pub type Weight = u64;
/// An owned position in n-dimensional space.
pub type Coordinates = Vec<Energy>;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// CONFIGURATION
// ============================================================================
/// Environment variable naming the seeding strategy for [`Seeding::from_env`].
pub const SEEDING_ENV: &str = "KMEANS_SEEDING";
