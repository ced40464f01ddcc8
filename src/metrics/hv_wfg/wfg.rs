use std::cmp::Ordering;

use log::{debug, warn};

use crate::core::HvError;
use crate::metrics::dominance::{compare, Dominance};
use crate::metrics::hv_wfg::frames::{Frame, FrameArena};
use crate::metrics::hv_wfg::WfgConfig;
use crate::metrics::volume::volume_between;
use crate::metrics::{HyperVolume2D, HyperVolume3D, HyperVolumeSolver};

/// Calculate the hyper-volume using the WFG algorithm proposed by [While et al. (2012)](http://dx.doi.org/10.1109/TEVC.2010.2077298)
/// for a problem with `d` objectives and `n` points.
///
/// The points are sorted and sliced along their last coordinate: the hyper-volume is the sum of
/// the thickness of each slice times the exclusive hyper-volume of its point in `d - 1` dimensions.
/// The exclusive hyper-volume is the inclusive one minus the hyper-volume of the limited set,
/// which is calculated recursively. Sets with one or two points are solved in closed form.
///
/// **IMPLEMENTATION NOTES**:
/// 1) All coordinates are minimised and the reference point must be dominated by all points.
/// 2) When the recursion reaches `stop_dimension` coordinates, the remaining points are passed to
///    a terminal solver. By default this is [`HyperVolume2D`] for `2`, [`HyperVolume3D`] for `3`
///    and a WFG solver stopping at `2` for larger values. Use [`Wfg::with_fallback`] to plug in
///    another one.
/// 3) The limited sets are stored in one buffer per recursion level, which is allocated once for
///    each calculation and reused by all the calls at the same level.
#[derive(Debug)]
pub struct Wfg {
    /// The number of dimensions at which the terminal solver is used.
    stop_dimension: usize,
    /// The solver used when the recursion reaches `stop_dimension`.
    terminal: Box<dyn HyperVolumeSolver>,
}

impl Default for Wfg {
    fn default() -> Self {
        Self {
            stop_dimension: 2,
            terminal: Box::new(HyperVolume2D::new()),
        }
    }
}

impl Wfg {
    /// Initialise the WFG algorithm with the default terminal solver for `stop_dimension`.
    ///
    /// # Arguments
    ///
    /// * `stop_dimension`: The number of dimensions at which the recursion stops. This must be
    ///    at least `2`.
    ///
    /// returns: `Result<Wfg, HvError>`
    pub fn new(stop_dimension: usize) -> Result<Self, HvError> {
        let terminal: Box<dyn HyperVolumeSolver> = match stop_dimension {
            0 | 1 => return Err(HvError::InvalidStopDimension(stop_dimension)),
            2 => Box::new(HyperVolume2D::new()),
            3 => Box::new(HyperVolume3D::new()),
            _ => Box::new(Wfg::default()),
        };
        Ok(Self {
            stop_dimension,
            terminal,
        })
    }

    /// Initialise the WFG algorithm with a custom terminal solver.
    ///
    /// # Arguments
    ///
    /// * `stop_dimension`: The number of dimensions at which the recursion stops.
    /// * `solver`: The solver to use for sets with `stop_dimension` coordinates. If the solver is
    ///    restricted to a number of dimensions, this must match `stop_dimension`.
    ///
    /// returns: `Result<Wfg, HvError>`
    pub fn with_fallback(
        stop_dimension: usize,
        solver: Box<dyn HyperVolumeSolver>,
    ) -> Result<Self, HvError> {
        if stop_dimension < 2 {
            return Err(HvError::InvalidStopDimension(stop_dimension));
        }
        if let Some(dimension) = solver.dimension() {
            if dimension != stop_dimension {
                return Err(HvError::NonMatchingSolverDimension(
                    solver.name(),
                    dimension,
                    stop_dimension,
                ));
            }
        }
        Ok(Self {
            stop_dimension,
            terminal: solver,
        })
    }

    /// Initialise the WFG algorithm from its options.
    ///
    /// # Arguments
    ///
    /// * `config`: The options.
    ///
    /// returns: `Result<Wfg, HvError>`
    pub fn from_config(config: &WfgConfig) -> Result<Self, HvError> {
        Self::new(config.stop_dimension)
    }

    /// The number of dimensions at which the recursion stops.
    ///
    /// returns: `usize`
    pub fn stop_dimension(&self) -> usize {
        self.stop_dimension
    }
}

impl HyperVolumeSolver for Wfg {
    fn name(&self) -> String {
        "WFG algorithm".to_string()
    }

    fn volume(&self, points: &mut [Vec<f64>], reference: &[f64]) -> f64 {
        let dimension = reference.len();
        if points.is_empty() {
            return 0.0;
        }
        if self.stop_dimension > dimension {
            warn!(
                "The stop dimension ({}) is larger than the number of dimensions ({}). The terminal solver '{}' will not be used",
                self.stop_dimension,
                dimension,
                self.terminal.name()
            );
        }
        debug!(
            "Calculating the hyper-volume of {} points with {} dimensions",
            points.len(),
            dimension
        );

        let mut run = WfgRun {
            wfg: self,
            reference,
            arena: FrameArena::new(points, dimension),
            relations: Vec::with_capacity(points.len()),
        };
        let volume = run.compute_hv(0, dimension);
        debug!("Used {} recursion levels", run.arena.depth());
        volume
    }
}

/// The state of one hyper-volume calculation. This owns the frames, which are released when the
/// calculation ends.
struct WfgRun<'a> {
    wfg: &'a Wfg,
    reference: &'a [f64],
    arena: FrameArena,
    /// Dominance relations between the candidate and the kept points of a limited set.
    relations: Vec<Dominance>,
}

impl WfgRun<'_> {
    /// Calculate the hyper-volume of the points in the frame at `level` using their first `width`
    /// coordinates.
    fn compute_hv(&mut self, level: usize, width: usize) -> f64 {
        let reference = self.reference;
        let frame = self.arena.frame(level);
        let points = frame.points();
        match points {
            [] => return 0.0,
            [p] => return volume_between(p, reference, width),
            [p0, p1] => {
                let intersection: f64 = (0..width)
                    .map(|i| reference[i] - p0[i].max(p1[i]))
                    .product();
                return volume_between(p0, reference, width) + volume_between(p1, reference, width)
                    - intersection;
            }
            _ => {}
        }

        let wfg = self.wfg;
        if width == wfg.stop_dimension {
            let points = self.arena.frame_mut(level).points_mut();
            return wfg.terminal.volume(points, &reference[..width]);
        }

        sort_descending(self.arena.frame_mut(level).points_mut(), width);

        let slice = width - 1;
        let mut volume = 0.0;
        for p_idx in 0..self.arena.frame(level).size() {
            let coordinate = self.arena.frame(level).points()[p_idx][slice];
            let exclusive = self.exclusive_hv(level, p_idx, slice);
            volume += ((coordinate - reference[slice]) * exclusive).abs();
        }
        volume
    }

    /// Calculate the exclusive hyper-volume of the point at `p_idx` in the frame at `level`
    /// relative to the points that follow it, using their first `width` coordinates.
    fn exclusive_hv(&mut self, level: usize, p_idx: usize, width: usize) -> f64 {
        let reference = self.reference;
        self.arena.ensure_level(level + 1, width);

        let (source, target) = self.arena.split(level);
        limit_set(source.points(), p_idx, width, target, &mut self.relations);
        let inclusive = volume_between(&source.points()[p_idx], reference, width);

        match target.points() {
            [] => inclusive,
            [limited] => inclusive - volume_between(limited, reference, width),
            _ => inclusive - self.compute_hv(level + 1, width),
        }
    }
}

/// Sort the points in descending order, using coordinate `width - 1` as the most significant one
/// and breaking ties with the preceding coordinates.
fn sort_descending(points: &mut [Vec<f64>], width: usize) {
    points.sort_unstable_by(|a, b| {
        (0..width)
            .rev()
            .map(|i| b[i].total_cmp(&a[i]))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });
}

/// Build the limited set of the point at `p_idx` into the `target` frame: the non-dominated
/// points among the componentwise maxima of the pivot and each point after it. Kept points that
/// are dominated by or equal to a new candidate are removed by compacting the frame.
///
/// # Arguments
///
/// * `points`: The points.
/// * `p_idx`: The index of the pivot.
/// * `width`: The number of leading coordinates to use.
/// * `target`: The frame where the limited set is written.
/// * `relations`: A buffer for the dominance relations of the candidate.
///
/// returns: `()`
fn limit_set(
    points: &[Vec<f64>],
    p_idx: usize,
    width: usize,
    target: &mut Frame,
    relations: &mut Vec<Dominance>,
) {
    let pivot = &points[p_idx];
    let slots = target.slots_mut();
    let mut kept = 0;

    for point in &points[p_idx + 1..] {
        for ((s, q), p) in slots[kept][..width].iter_mut().zip(point).zip(pivot) {
            *s = q.max(*p);
        }

        relations.clear();
        let mut keep_candidate = true;
        for other in &slots[..kept] {
            let relation = compare(&slots[kept], other, width);
            if relation == Dominance::SecondDominates {
                keep_candidate = false;
                break;
            }
            relations.push(relation);
        }
        if !keep_candidate {
            continue;
        }

        let mut prev = 0;
        for (next, relation) in relations.iter().enumerate() {
            if !matches!(relation, Dominance::FirstDominates | Dominance::Equal) {
                if prev < next {
                    slots.swap(prev, next);
                }
                prev += 1;
            }
        }
        if prev < kept {
            slots.swap(prev, kept);
        }
        kept = prev + 1;
    }

    target.set_size(kept);
}
