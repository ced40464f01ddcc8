use crate::core::HvError;

/// Calculate the volume of the axis-aligned box between a `point` and the `reference` point using
/// their first `width` coordinates. The point must not exceed the reference point in any of these
/// coordinates; this is not checked here (see [`assert_valid`]).
///
/// # Arguments
///
/// * `point`: The point.
/// * `reference`: The reference point.
/// * `width`: The number of leading coordinates to use.
///
/// returns: `f64`
pub fn volume_between(point: &[f64], reference: &[f64], width: usize) -> f64 {
    point[..width]
        .iter()
        .zip(&reference[..width])
        .map(|(p, r)| r - p)
        .product()
}

/// Check that the `reference` point is dominated by or equal to every point in all its
/// coordinates.
///
/// # Arguments
///
/// * `points`: The points.
/// * `reference`: The reference point.
///
/// returns: `Result<(), HvError>` The error contains the index and value of the first offending
/// coordinate.
pub fn assert_valid(points: &[Vec<f64>], reference: &[f64]) -> Result<(), HvError> {
    for (point_idx, point) in points.iter().enumerate() {
        for (coord_idx, (p, r)) in point.iter().zip(reference).enumerate() {
            if p > r {
                return Err(HvError::NonDominatedPoint(point_idx, coord_idx, *p, *r));
            }
        }
    }
    Ok(())
}
