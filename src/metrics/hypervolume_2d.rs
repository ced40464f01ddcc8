use crate::metrics::HyperVolumeSolver;

/// Calculate the hyper-volume for a two-objective problem by summing the areas of the rectangles
/// between the points and the reference point. The points are swept by increasing first coordinate
/// and a point only contributes when it improves the best second coordinate seen so far; dominated
/// and duplicated points are therefore skipped without a separate non-dominated sort. The
/// complexity is O(`n log n`).
#[derive(Debug, Default, Clone)]
pub struct HyperVolume2D;

impl HyperVolume2D {
    /// Create the two-dimensional solver.
    ///
    /// returns: `HyperVolume2D`
    pub fn new() -> Self {
        Self
    }
}

impl HyperVolumeSolver for HyperVolume2D {
    fn name(&self) -> String {
        "2D Hyper-volume".to_string()
    }

    fn dimension(&self) -> Option<usize> {
        Some(2)
    }

    fn volume(&self, points: &mut [Vec<f64>], reference: &[f64]) -> f64 {
        points.sort_unstable_by(|a, b| a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1])));

        let mut area = 0.0;
        let mut best_y = reference[1];
        for point in points.iter() {
            if point[1] < best_y {
                area += (reference[0] - point[0]) * (best_y - point[1]);
                best_y = point[1];
            }
        }
        area
    }
}
