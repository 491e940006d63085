//! Seams between the optimizer and its distance source.

use crate::stop::Coordinates;

/// Provides a pairwise distance matrix (kilometers) for a set of locations.
///
/// The matrix is indexed by the provided location order and must be
/// `locations.len()` square. 2-opt refinement assumes it is symmetric.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[Coordinates]) -> Vec<Vec<f64>>;
}
