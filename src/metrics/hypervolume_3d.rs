use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use crate::metrics::HyperVolumeSolver;

/// Calculate the hyper-volume for a three-objective problem by sweeping the points along the third
/// coordinate, as proposed by [Beume et al. (2009)](http://dx.doi.org/10.1109/TEVC.2009.2015575).
/// The non-dominated front of the points swept so far is projected onto the first two coordinates
/// and kept in an ordered map, so that its dominated area can be updated for each new point in
/// O(`log n`) amortised time. The complexity is O(`n log n`).
#[derive(Debug, Default, Clone)]
pub struct HyperVolume3D;

impl HyperVolume3D {
    /// Create the three-dimensional solver.
    ///
    /// returns: `HyperVolume3D`
    pub fn new() -> Self {
        Self
    }
}

impl HyperVolumeSolver for HyperVolume3D {
    fn name(&self) -> String {
        "3D Hyper-volume".to_string()
    }

    fn dimension(&self) -> Option<usize> {
        Some(3)
    }

    fn volume(&self, points: &mut [Vec<f64>], reference: &[f64]) -> f64 {
        points.sort_unstable_by(|a, b| a[2].total_cmp(&b[2]));
        let mut last_z = match points.first() {
            None => return 0.0,
            Some(first) => first[2],
        };

        // the 2D staircase: the second coordinate strictly decreases as the first one increases
        let mut front: BTreeMap<OrderedFloat<f64>, f64> = BTreeMap::new();
        let mut area = 0.0;
        let mut volume = 0.0;

        for point in points.iter() {
            let (x, y) = (point[0], point[1]);
            volume += area * (point[2] - last_z);
            last_z = point[2];

            // skip points whose projection is dominated by the front
            if let Some((_, &left_y)) = front.range(..=OrderedFloat(x)).next_back() {
                if left_y <= y {
                    continue;
                }
            }

            let y_top = front
                .range(..OrderedFloat(x))
                .next_back()
                .map_or(reference[1], |(_, &left_y)| left_y);

            // projections dominated by the new point are replaced
            let mut removed: Vec<(f64, f64)> = Vec::new();
            let mut x_right = reference[0];
            for (&key, &key_y) in front.range(OrderedFloat(x)..) {
                if key_y < y {
                    x_right = key.into_inner();
                    break;
                }
                removed.push((key.into_inner(), key_y));
            }

            let mut covered = 0.0;
            for (ri, (removed_x, removed_y)) in removed.iter().enumerate() {
                let next_x = removed.get(ri + 1).map_or(x_right, |(next_x, _)| *next_x);
                covered += (next_x - removed_x) * (y_top - removed_y);
            }
            area += (x_right - x) * (y_top - y) - covered;

            for (removed_x, _) in removed {
                front.remove(&OrderedFloat(removed_x));
            }
            front.insert(OrderedFloat(x), y);
        }

        volume + area * (reference[2] - last_z)
    }
}
