use log::debug;

/// The points stored at one recursion level. The buffer is allocated once with the maximum number
/// of points and the number of valid points is tracked separately.
#[derive(Debug)]
pub(crate) struct Frame {
    /// The point buffers. All have the same number of coordinates.
    points: Vec<Vec<f64>>,
    /// The number of valid points at the start of `points`.
    size: usize,
}

impl Frame {
    /// Create a frame with `capacity` points with `width` coordinates set to zero.
    fn empty(capacity: usize, width: usize) -> Self {
        Self {
            points: vec![vec![0.0; width]; capacity],
            size: 0,
        }
    }

    /// The valid points.
    pub(crate) fn points(&self) -> &[Vec<f64>] {
        &self.points[..self.size]
    }

    /// The valid points as mutable slice (for in-place sorting).
    pub(crate) fn points_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.points[..self.size]
    }

    /// All the point buffers, including the ones past the logical size.
    pub(crate) fn slots_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.points
    }

    /// The number of valid points.
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    /// Set the number of valid points. This never exceeds the frame capacity.
    pub(crate) fn set_size(&mut self, size: usize) {
        debug_assert!(size <= self.points.len());
        self.size = size;
    }
}

/// The frames of all the recursion levels reached by one hyper-volume calculation. Level `0`
/// contains a copy of the input points; the frame at level `k + 1` contains the limited set
/// built while processing a point at level `k`. Frames are allocated the first time a level is
/// reached and are reused by all the following calls at the same level.
#[derive(Debug)]
pub(crate) struct FrameArena {
    frames: Vec<Frame>,
    /// The number of points each frame can hold.
    capacity: usize,
}

impl FrameArena {
    /// Copy the first `dimension` coordinates of the `points` into the frame at level `0`.
    ///
    /// # Arguments
    ///
    /// * `points`: The input points.
    /// * `dimension`: The number of coordinates. This is also the maximum recursion depth.
    ///
    /// returns: `FrameArena`
    pub(crate) fn new(points: &[Vec<f64>], dimension: usize) -> Self {
        let capacity = points.len();
        let mut frames = Vec::with_capacity(dimension);
        frames.push(Frame {
            points: points.iter().map(|p| p[..dimension].to_vec()).collect(),
            size: capacity,
        });
        Self { frames, capacity }
    }

    /// Make sure that a frame exists at `level` with points of `width` coordinates.
    pub(crate) fn ensure_level(&mut self, level: usize, width: usize) {
        while self.frames.len() <= level {
            debug!(
                "Allocating frame for recursion level {} with {} points of width {}",
                self.frames.len(),
                self.capacity,
                width
            );
            self.frames.push(Frame::empty(self.capacity, width));
        }
    }

    /// The frame at `level`.
    pub(crate) fn frame(&self, level: usize) -> &Frame {
        &self.frames[level]
    }

    /// The mutable frame at `level`.
    pub(crate) fn frame_mut(&mut self, level: usize) -> &mut Frame {
        &mut self.frames[level]
    }

    /// Borrow the frame at `level` for reading and the one at `level + 1` for writing.
    pub(crate) fn split(&mut self, level: usize) -> (&Frame, &mut Frame) {
        let (head, tail) = self.frames.split_at_mut(level + 1);
        (&head[level], &mut tail[0])
    }

    /// The number of allocated levels.
    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }
}
