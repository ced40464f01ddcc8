use log::{debug, warn};

use crate::core::{HvError, ObjectiveDirection};
use crate::metrics::volume::assert_valid;
use crate::metrics::{HyperVolumeSolver, Wfg};
use crate::utils::{argsort, vector_max, vector_min, Sort};

/// Check the input arguments of the hyper-volume functions: the number of dimensions, the size of
/// each point and the presence of NaNs.
///
/// # Arguments
///
/// * `points`: The points to use in the calculation.
/// * `reference_point`: The reference or anti-optimal point to use in the calculation.
///
/// returns: `Result<(), HvError>`
pub(crate) fn check_args(points: &[Vec<f64>], reference_point: &[f64]) -> Result<(), HvError> {
    if reference_point.len() < 2 {
        return Err(HvError::TooFewObjectives(reference_point.len()));
    }
    if points.is_empty() {
        return Err(HvError::EmptyPointSet);
    }
    if let Some(coord_idx) = reference_point.iter().position(|v| v.is_nan()) {
        return Err(HvError::NaN(format!(
            "coordinate #{coord_idx} of the reference point"
        )));
    }

    for (point_idx, point) in points.iter().enumerate() {
        if point.len() != reference_point.len() {
            return Err(HvError::NonMatchingDimension(
                format!("point #{point_idx}"),
                point.len(),
                reference_point.len(),
            ));
        }
        if let Some(coord_idx) = point.iter().position(|v| v.is_nan()) {
            return Err(HvError::NaN(format!(
                "coordinate #{coord_idx} of point #{point_idx}"
            )));
        }
    }
    Ok(())
}

/// Calculates a reference point by taking the maximum of each objective (or minimum if the
/// objective is maximised) from the points, so that the reference point will be dominated by all
/// of them. An optional offset for all objectives could also be added or removed to enforce strict
/// dominance (if the objective is minimised the offset is added to the calculated reference point,
/// otherwise it is subtracted).
///
/// # Arguments
///
/// * `points`: The points to use in the calculation.
/// * `directions`: The direction of each objective. When `None` all objectives are minimised.
/// * `offset`: The offset for each objective to add to the calculated reference point. This must
///    have a size equal to the number of objectives.
///
/// returns: `Result<Vec<f64>, HvError>` The reference point. This returns an error if there are
/// no points or the size of the directions or offset does not match the number of objectives.
pub fn estimate_reference_point(
    points: &[Vec<f64>],
    directions: Option<&[ObjectiveDirection]>,
    offset: Option<Vec<f64>>,
) -> Result<Vec<f64>, HvError> {
    let first = points.first().ok_or(HvError::EmptyPointSet)?;
    let number_of_objectives = first.len();

    let directions = match directions {
        None => vec![ObjectiveDirection::Minimise; number_of_objectives],
        Some(directions) if directions.len() == number_of_objectives => directions.to_vec(),
        Some(directions) => {
            return Err(HvError::NonMatchingDimension(
                "vector of objective directions".to_string(),
                directions.len(),
                number_of_objectives,
            ))
        }
    };
    if let Some(ref offset) = offset {
        if offset.len() != number_of_objectives {
            return Err(HvError::NonMatchingDimension(
                "offset".to_string(),
                offset.len(),
                number_of_objectives,
            ));
        }
    }

    let mut ref_point: Vec<f64> = Vec::with_capacity(number_of_objectives);
    for (obj_idx, direction) in directions.iter().enumerate() {
        let obj_values = points
            .iter()
            .enumerate()
            .map(|(point_idx, point)| {
                point.get(obj_idx).copied().ok_or_else(|| {
                    HvError::NonMatchingDimension(
                        format!("point #{point_idx}"),
                        point.len(),
                        number_of_objectives,
                    )
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;
        // get maximum if objective is minimised
        let coordinate = match direction {
            ObjectiveDirection::Minimise => vector_max(&obj_values),
            ObjectiveDirection::Maximise => vector_min(&obj_values),
        }?;
        ref_point.push(coordinate);
    }

    // add or remove offset
    if let Some(offset) = offset {
        for (idx, direction) in directions.iter().enumerate() {
            ref_point[idx] += direction.sign() * offset[idx];
        }
    }

    Ok(ref_point)
}

/// Calculate the exact hyper-volume of a set of points with the WFG algorithm (see [`Wfg`]) and
/// its default options. All objectives are minimised.
///
/// # Arguments
///
/// * `points`: The points. Each point must have the same number of coordinates as the reference
///    point and must not exceed it in any coordinate.
/// * `reference_point`: The reference or anti-optimal point to use in the calculation. If you are
///    not sure about the point to use you could pick the worst value of each objective using
///    [`estimate_reference_point`].
///
/// returns: `Result<f64, HvError>`
///
/// # Example
/// ```
///  use hv_wfg::metrics::hyper_volume;
///
///  let points = vec![vec![1.0, 5.0], vec![4.0, 2.0]];
///  assert_eq!(hyper_volume(&points, &[6.0, 6.0]).unwrap(), 11.0);
/// ```
pub fn hyper_volume(points: &[Vec<f64>], reference_point: &[f64]) -> Result<f64, HvError> {
    Ok(HyperVolume::new(points, reference_point)?.compute())
}

/// A validated set of points and its reference point. The points are stored with all objectives
/// minimised.
#[derive(Debug, Clone)]
pub struct HyperVolume {
    /// The points. The size of this vector corresponds to the number of points and the size of the
    /// nested vector corresponds to the number of objectives.
    points: Vec<Vec<f64>>,
    /// The reference point.
    reference_point: Vec<f64>,
}

impl HyperVolume {
    /// Check the points and the reference point for a problem where all objectives are minimised.
    ///
    /// # Arguments
    ///
    /// * `points`: The points.
    /// * `reference_point`: The reference point. This must be dominated by or equal to every
    ///    point.
    ///
    /// returns: `Result<HyperVolume, HvError>`
    pub fn new(points: &[Vec<f64>], reference_point: &[f64]) -> Result<Self, HvError> {
        Self::with_directions(
            points,
            reference_point,
            &vec![ObjectiveDirection::Minimise; reference_point.len()],
        )
    }

    /// Check the points and the reference point for a problem whose objectives may be minimised or
    /// maximised. The coordinates of maximised objectives of the points and of the reference point
    /// are multiplied by -1, as the algorithms assume that all objectives are minimised.
    ///
    /// # Arguments
    ///
    /// * `points`: The points.
    /// * `reference_point`: The reference point. For maximised objectives, its coordinate must not
    ///    be larger than any point coordinate.
    /// * `directions`: The direction of each objective.
    ///
    /// returns: `Result<HyperVolume, HvError>`
    pub fn with_directions(
        points: &[Vec<f64>],
        reference_point: &[f64],
        directions: &[ObjectiveDirection],
    ) -> Result<Self, HvError> {
        check_args(points, reference_point)?;
        if directions.len() != reference_point.len() {
            return Err(HvError::NonMatchingDimension(
                "vector of objective directions".to_string(),
                directions.len(),
                reference_point.len(),
            ));
        }

        let flip = |values: &[f64]| -> Vec<f64> {
            values
                .iter()
                .zip(directions)
                .map(|(v, direction)| v * direction.sign())
                .collect()
        };
        let points: Vec<Vec<f64>> = points.iter().map(|point| flip(point.as_slice())).collect();
        let reference_point = flip(reference_point);

        // the reference point must be dominated by all points
        assert_valid(&points, &reference_point)?;

        let on_boundary = points
            .iter()
            .filter(|point| point.iter().zip(&reference_point).any(|(p, r)| p == r))
            .count();
        if on_boundary > 0 {
            warn!("{on_boundary} points lie on the boundary of the reference point and do not contribute to the hyper-volume");
        }
        debug!("Reference point is {:?}", reference_point);

        Ok(Self {
            points,
            reference_point,
        })
    }

    /// The points with all objectives minimised.
    ///
    /// returns: `&[Vec<f64>]`
    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    /// The reference point with all objectives minimised.
    ///
    /// returns: `&[f64]`
    pub fn reference_point(&self) -> &[f64] {
        &self.reference_point
    }

    /// Calculate the hyper-volume with the WFG algorithm and its default options.
    ///
    /// return: `f64`
    pub fn compute(&self) -> f64 {
        Self::volume_of(&Wfg::default(), self.points.clone(), &self.reference_point)
    }

    /// Calculate the hyper-volume with a given `solver`.
    ///
    /// # Arguments
    ///
    /// * `solver`: The algorithm to use.
    ///
    /// returns: `Result<f64, HvError>` An error is returned if the solver is restricted to a number
    /// of dimensions different from the number of objectives.
    pub fn compute_with(&self, solver: &dyn HyperVolumeSolver) -> Result<f64, HvError> {
        if let Some(dimension) = solver.dimension() {
            if dimension != self.reference_point.len() {
                return Err(HvError::NonMatchingSolverDimension(
                    solver.name(),
                    dimension,
                    self.reference_point.len(),
                ));
            }
        }
        Ok(Self::volume_of(
            solver,
            self.points.clone(),
            &self.reference_point,
        ))
    }

    /// Calculate the hyper-volume that is dominated by the point at `point_idx` only.
    ///
    /// # Arguments
    ///
    /// * `point_idx`: The point index.
    ///
    /// returns: `Result<f64, HvError>`
    pub fn exclusive(&self, point_idx: usize) -> Result<f64, HvError> {
        if point_idx >= self.points.len() {
            return Err(HvError::NonExistingIndex("point".to_string(), point_idx));
        }
        Ok(self.compute() - self.volume_without(point_idx))
    }

    /// Calculate the exclusive hyper-volume of every point (see [`HyperVolume::exclusive`]).
    ///
    /// returns: `Vec<f64>`
    pub fn contributions(&self) -> Vec<f64> {
        let total = self.compute();
        (0..self.points.len())
            .map(|point_idx| total - self.volume_without(point_idx))
            .collect()
    }

    /// Get the index of the point with the smallest exclusive hyper-volume. When more points share
    /// it, the one with the smallest index is returned.
    ///
    /// returns: `usize`
    pub fn least_contributor(&self) -> usize {
        argsort(&self.contributions(), Sort::Ascending)[0]
    }

    /// Get the index of the point with the largest exclusive hyper-volume.
    ///
    /// returns: `usize`
    pub fn greatest_contributor(&self) -> usize {
        argsort(&self.contributions(), Sort::Descending)[0]
    }

    /// The hyper-volume of all the points but the one at `point_idx`.
    fn volume_without(&self, point_idx: usize) -> f64 {
        let others: Vec<Vec<f64>> = self
            .points
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != point_idx)
            .map(|(_, point)| point.clone())
            .collect();
        Self::volume_of(&Wfg::default(), others, &self.reference_point)
    }

    /// Run a solver on a copy of the points.
    fn volume_of(
        solver: &dyn HyperVolumeSolver,
        mut points: Vec<Vec<f64>>,
        reference_point: &[f64],
    ) -> f64 {
        if points.is_empty() {
            return 0.0;
        }
        solver.volume(&mut points, reference_point)
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use crate::core::test_utils::{
        assert_hv_eq, brute_force_hv, init_logger, random_front, random_points,
        union_of_rectangles,
    };
    use crate::core::{HvError, ObjectiveDirection};
    use crate::metrics::{
        estimate_reference_point, hyper_volume, HyperVolume, HyperVolume2D, HyperVolume3D, Wfg,
    };

    #[test]
    /// Test when the estimate_reference_point function returns an error
    fn test_reference_point_error() {
        // no points
        let points: Vec<Vec<f64>> = Vec::new();
        assert!(estimate_reference_point(&points, None, None)
            .unwrap_err()
            .to_string()
            .contains("There are no points in the array"));

        // wrong offset size
        let points = vec![vec![-1.0, -2.0], vec![3.0, 4.0], vec![0.0, 6.0]];
        let err = estimate_reference_point(&points, None, Some(vec![0.0]))
            .unwrap_err()
            .to_string();
        assert!(err.contains("The offset has 1 coordinates, but the reference point has 2"));

        // wrong point size
        let points = vec![vec![-1.0, -2.0], vec![3.0]];
        assert!(matches!(
            estimate_reference_point(&points, None, None).unwrap_err(),
            HvError::NonMatchingDimension(_, 1, 2)
        ));
    }

    #[test]
    fn test_reference_point() {
        // No offset - minimise objectives
        let points = vec![vec![-1.0, -2.0], vec![3.0, 4.0], vec![0.0, 6.0]];
        assert_eq!(
            estimate_reference_point(&points, None, None).unwrap(),
            vec![3.0, 6.0]
        );

        // With offset - minimise objectives
        assert_eq!(
            estimate_reference_point(&points, None, Some(vec![1.0, 2.0])).unwrap(),
            vec![4.0, 8.0]
        );

        // Maximise objective 2
        let directions = [ObjectiveDirection::Minimise, ObjectiveDirection::Maximise];
        assert_eq!(
            estimate_reference_point(&points, Some(&directions[..]), None).unwrap(),
            vec![3.0, -2.0]
        );
        assert_eq!(
            estimate_reference_point(&points, Some(&directions[..]), Some(vec![1.0, 2.0])).unwrap(),
            vec![4.0, -4.0]
        );
    }

    #[test]
    fn test_invalid_arguments() {
        let err = hyper_volume(&[vec![1.0]], &[2.0]).unwrap_err();
        assert!(matches!(err, HvError::TooFewObjectives(1)));

        let err = hyper_volume(&[], &[2.0, 2.0]).unwrap_err();
        assert!(matches!(err, HvError::EmptyPointSet));

        let err = hyper_volume(&[vec![1.0, 1.0], vec![1.0, 1.0, 1.0]], &[2.0, 2.0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The point #1 has 3 coordinates, but the reference point has 2"
        );

        let err = hyper_volume(&[vec![1.0, f64::NAN]], &[2.0, 2.0]).unwrap_err();
        assert_eq!(err.to_string(), "NaN detected in coordinate #1 of point #0");
    }

    #[test]
    /// A point exceeding the reference point is an error and not a wrong number
    fn test_non_dominated_reference_point() {
        let points = vec![vec![1.0, 5.0], vec![4.0, 2.0], vec![7.0, 1.0]];
        let err = hyper_volume(&points, &[6.0, 6.0]).unwrap_err();
        assert!(matches!(err, HvError::NonDominatedPoint(2, 0, _, _)));
        assert!(err.to_string().contains("must dominate all points"));

        // mirrored reference point
        assert!(hyper_volume(&points, &[-10.0, -10.0]).is_err());
    }

    #[test]
    fn test_single_point() {
        let hv = hyper_volume(&[vec![1.0, 2.0, 3.0, 4.0]], &[2.0, 4.0, 6.0, 8.0]).unwrap();
        assert_eq!(hv, 1.0 * 2.0 * 3.0 * 4.0);
    }

    #[test]
    fn test_two_points() {
        let hv = hyper_volume(&[vec![1.0, 5.0], vec![4.0, 2.0]], &[6.0, 6.0]).unwrap();
        assert_eq!(hv, 11.0);
    }

    #[test]
    fn test_staircase() {
        let points = vec![vec![1.0, 6.0], vec![3.0, 4.0], vec![5.0, 1.0]];
        let ref_point = [6.0, 7.0];
        assert_hv_eq(
            hyper_volume(&points, &ref_point).unwrap(),
            union_of_rectangles(&points, &ref_point),
        );
    }

    #[test]
    /// The result does not change when the points are shuffled
    fn test_permutation() {
        init_logger();
        let (mut points, ref_point) = random_front(30, 4, 3);
        let expected = hyper_volume(&points, &ref_point).unwrap();

        points.reverse();
        assert_hv_eq(hyper_volume(&points, &ref_point).unwrap(), expected);
        points.rotate_left(11);
        assert_hv_eq(hyper_volume(&points, &ref_point).unwrap(), expected);
        points.swap(0, 17);
        assert_hv_eq(hyper_volume(&points, &ref_point).unwrap(), expected);
    }

    #[test]
    /// Dominated and duplicated points do not change the result
    fn test_dominated_and_duplicated_points() {
        let (mut points, ref_point) = random_front(20, 3, 11);
        let expected = hyper_volume(&points, &ref_point).unwrap();

        points.push(points[4].clone());
        assert_hv_eq(hyper_volume(&points, &ref_point).unwrap(), expected);

        let dominated: Vec<f64> = points[7].iter().map(|v| v + 0.01).collect();
        points.push(dominated);
        assert_hv_eq(hyper_volume(&points, &ref_point).unwrap(), expected);

        let on_boundary = vec![0.0, 0.0, ref_point[2]];
        points.push(on_boundary);
        assert_hv_eq(hyper_volume(&points, &ref_point).unwrap(), expected);
    }

    #[test]
    fn test_brute_force() {
        for seed in 0..10 {
            for d in 3..=5 {
                let (points, ref_point) = random_points(8, d, seed + 100);
                assert_hv_eq(
                    hyper_volume(&points, &ref_point).unwrap(),
                    brute_force_hv(&points, &ref_point),
                );
            }
        }
    }

    #[test]
    fn test_compute_with() {
        let (points, ref_point) = random_front(50, 3, 5);
        let hv = HyperVolume::new(&points, &ref_point).unwrap();
        let expected = hv.compute();
        assert_hv_eq(hv.compute_with(&HyperVolume3D::new()).unwrap(), expected);
        assert_hv_eq(hv.compute_with(&Wfg::new(3).unwrap()).unwrap(), expected);

        let err = hv.compute_with(&HyperVolume2D::new()).unwrap_err();
        assert!(matches!(err, HvError::NonMatchingSolverDimension(_, 2, 3)));
    }

    #[test]
    /// Maximise objective #1
    fn test_maximise_objective() {
        let ref_point = [-10.0, 10.0];
        let points = vec![
            vec![11.1, 8.1],
            vec![8.1, 6.1],
            vec![5.1, 4.1],
            vec![3.1, 3.1],
            vec![2.1, 2.1],
            vec![1.1, 1.1],
            vec![0.0, 5.1],
        ];
        let directions = [ObjectiveDirection::Maximise, ObjectiveDirection::Minimise];
        let hv = HyperVolume::with_directions(&points, &ref_point, &directions).unwrap();
        assert_eq!(hv.reference_point(), &[10.0, 10.0]);
        assert_eq!(hv.points()[0], vec![-11.1, 8.1]);
        assert_approx_eq!(f64, hv.compute(), 142.79, epsilon = 1e-9);

        // the reference point must be below all the maximised values
        let err = HyperVolume::with_directions(&points, &[1.0, 10.0], &directions).unwrap_err();
        assert!(matches!(err, HvError::NonDominatedPoint(_, 0, _, _)));

        let err = HyperVolume::with_directions(&points, &ref_point, &directions[..1]).unwrap_err();
        assert!(matches!(err, HvError::NonMatchingDimension(_, 1, 2)));
    }

    #[test]
    fn test_contributions() {
        let points = vec![
            vec![1.0, 5.0],
            vec![4.0, 2.0],
            vec![4.0, 2.5],
            vec![2.0, 3.0],
        ];
        let hv = HyperVolume::new(&points, &[6.0, 6.0]).unwrap();

        // (1, 5): x in [1, 2), y in [5, 6)
        assert_approx_eq!(f64, hv.exclusive(0).unwrap(), 1.0, epsilon = 1e-12);
        // (4, 2): x in [4, 6), y in [2, 2.5)
        assert_approx_eq!(f64, hv.exclusive(1).unwrap(), 1.0, epsilon = 1e-12);
        // dominated
        assert_approx_eq!(f64, hv.exclusive(2).unwrap(), 0.0, epsilon = 1e-12);
        // (2, 3): x in [2, 4), y in [3, 5)
        assert_approx_eq!(f64, hv.exclusive(3).unwrap(), 4.0, epsilon = 1e-12);

        assert_eq!(hv.contributions().len(), 4);
        assert_eq!(hv.least_contributor(), 2);
        assert_eq!(hv.greatest_contributor(), 3);

        assert!(matches!(
            hv.exclusive(4).unwrap_err(),
            HvError::NonExistingIndex(_, 4)
        ));
    }
}
