use std::fmt::Debug;

use crate::core::HvError;
use crate::metrics::hypervolume::check_args;
use crate::metrics::volume::assert_valid;

/// A trait to implement an exact hyper-volume algorithm. All coordinates are minimised and the
/// reference point must be dominated by or equal to every point.
pub trait HyperVolumeSolver: Debug {
    /// The algorithm name.
    ///
    /// returns: `String`
    fn name(&self) -> String;

    /// The number of dimensions the algorithm is restricted to, if any.
    ///
    /// returns: `Option<usize>`
    fn dimension(&self) -> Option<usize> {
        None
    }

    /// Calculate the hyper-volume of `points` without validating them. Only the first
    /// `reference.len()` coordinates of each point are used. The solver may reorder `points`.
    ///
    /// # Arguments
    ///
    /// * `points`: The points. They must not exceed the reference point in any coordinate.
    /// * `reference`: The reference point.
    ///
    /// returns: `f64`
    fn volume(&self, points: &mut [Vec<f64>], reference: &[f64]) -> f64;

    /// Check the points and calculate their hyper-volume.
    ///
    /// # Arguments
    ///
    /// * `points`: The points.
    /// * `reference`: The reference point.
    ///
    /// returns: `Result<f64, HvError>`
    fn compute(&self, points: &[Vec<f64>], reference: &[f64]) -> Result<f64, HvError> {
        check_args(points, reference)?;
        if let Some(dimension) = self.dimension() {
            if dimension != reference.len() {
                return Err(HvError::NonMatchingSolverDimension(
                    self.name(),
                    dimension,
                    reference.len(),
                ));
            }
        }
        assert_valid(points, reference)?;

        let mut points = points.to_vec();
        Ok(self.volume(&mut points, reference))
    }
}
