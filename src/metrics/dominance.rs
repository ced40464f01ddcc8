/// The Pareto dominance relationship between two points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dominance {
    /// The first point dominates the second one.
    FirstDominates,
    /// The second point dominates the first one.
    SecondDominates,
    /// The points have the same coordinates.
    Equal,
    /// Neither point dominates the other.
    NonDominated,
}

/// Get the dominance relationship between two points using their first `width` coordinates.
/// Coordinates are minimised: point $A$ dominates $B$ when $A_i \le B_i$ for all coordinates and
/// $A_i < B_i$ for at least one coordinate.
///
/// # Arguments
///
/// * `first`: The first point.
/// * `second`: The second point.
/// * `width`: The number of leading coordinates to compare.
///
/// returns: `Dominance`
pub fn compare(first: &[f64], second: &[f64], width: usize) -> Dominance {
    let mut first_better = false;
    let mut second_better = false;
    for (a, b) in first[..width].iter().zip(&second[..width]) {
        if a < b {
            if second_better {
                return Dominance::NonDominated;
            }
            first_better = true;
        } else if b < a {
            if first_better {
                return Dominance::NonDominated;
            }
            second_better = true;
        }
    }

    match (first_better, second_better) {
        (true, _) => Dominance::FirstDominates,
        (_, true) => Dominance::SecondDominates,
        _ => Dominance::Equal,
    }
}
