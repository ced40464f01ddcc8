use float_cmp::{approx_eq, F64Margin};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Install the test logger once. Repeated calls are ignored.
pub(crate) fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

/// Compare two values using a relative tolerance suitable for hyper-volumes that may span several
/// orders of magnitude.
pub(crate) fn assert_hv_eq(calculated: f64, expected: f64) {
    let margins = F64Margin {
        epsilon: 1e-9 * expected.abs().max(1.0),
        ulps: 8,
    };
    if !approx_eq!(f64, calculated, expected, margins) {
        panic!(
            r#"assertion failed: `(left approx_eq right)`
                    left: `{calculated:?}`,
                    right: `{expected:?}`"#,
        )
    }
}

/// Generate `n` random points with `d` coordinates in `[0, 1)` and the reference point at `1.0`.
///
/// # Arguments
///
/// * `n`: The number of points.
/// * `d`: The number of coordinates.
/// * `seed`: The seed for the random number generator.
///
/// returns: `(Vec<Vec<f64>>, Vec<f64>)` The points and the reference point.
pub(crate) fn random_points(n: usize, d: usize, seed: u64) -> (Vec<Vec<f64>>, Vec<f64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points = (0..n)
        .map(|_| (0..d).map(|_| rng.gen_range(0.0..1.0)).collect())
        .collect();
    (points, vec![1.0; d])
}

/// Generate `n` random points lying on the simplex `sum(x) = 1` so that they are mutually
/// non-dominated. The reference point is at `1.1`.
pub(crate) fn random_front(n: usize, d: usize, seed: u64) -> (Vec<Vec<f64>>, Vec<f64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points = (0..n)
        .map(|_| {
            let raw: Vec<f64> = (0..d).map(|_| rng.gen_range(0.01..1.0)).collect();
            let total: f64 = raw.iter().sum();
            raw.into_iter().map(|v| v / total).collect()
        })
        .collect();
    (points, vec![1.1; d])
}

/// Calculate the hyper-volume by inclusion-exclusion over all the `2^n - 1` non-empty subsets of
/// the points. The volume of the intersection of a subset is the box between the componentwise
/// maximum of its points and the reference point.
pub(crate) fn brute_force_hv(points: &[Vec<f64>], reference: &[f64]) -> f64 {
    let n = points.len();
    assert!(n <= 16, "Too many points for the brute-force calculation");

    let mut total = 0.0;
    for mask in 1_usize..(1 << n) {
        let mut corner = vec![f64::NEG_INFINITY; reference.len()];
        for (pi, point) in points.iter().enumerate() {
            if mask & (1 << pi) != 0 {
                for (c, v) in corner.iter_mut().zip(point) {
                    *c = c.max(*v);
                }
            }
        }
        let volume: f64 = corner.iter().zip(reference).map(|(c, r)| r - c).product();
        if mask.count_ones() % 2 == 1 {
            total += volume;
        } else {
            total -= volume;
        }
    }
    total
}

/// Calculate the area of the union of the rectangles between each point and the reference point
/// by splitting the plane into the grid of all point coordinates and summing the covered cells.
pub(crate) fn union_of_rectangles(points: &[Vec<f64>], reference: &[f64]) -> f64 {
    let mut xs: Vec<f64> = points.iter().map(|p| p[0]).collect();
    xs.push(reference[0]);
    xs.sort_by(|a, b| a.total_cmp(b));
    xs.dedup();
    let mut ys: Vec<f64> = points.iter().map(|p| p[1]).collect();
    ys.push(reference[1]);
    ys.sort_by(|a, b| a.total_cmp(b));
    ys.dedup();

    let mut area = 0.0;
    for x in xs.windows(2) {
        for y in ys.windows(2) {
            if points.iter().any(|p| p[0] <= x[0] && p[1] <= y[0]) {
                area += (x[1] - x[0]) * (y[1] - y[0]);
            }
        }
    }
    area
}
