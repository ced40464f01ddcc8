use thiserror::Error;

#[derive(Error, Debug)]
/// Errors raised by the library.
pub enum HvError {
    #[error("The following error occurred: {0}")]
    Generic(String),
    #[error("The stop dimension for the WFG algorithm must be greater than or equal to 2, but {0} was given")]
    InvalidStopDimension(usize),
    #[error("The solver '{0}' computes the hyper-volume for {1} dimensions, but {2} were requested")]
    NonMatchingSolverDimension(String, usize, usize),
    #[error("An error occurred with the WFG configuration: {0}")]
    Config(String),
    #[error("There are no points in the array")]
    EmptyPointSet,
    #[error("The hyper-volume can only be calculated on problems with 2 or more objectives, but {0} were given")]
    TooFewObjectives(usize),
    #[error("The {0} has {1} coordinates, but the reference point has {2}")]
    NonMatchingDimension(String, usize, usize),
    #[error("NaN detected in {0}")]
    NaN(String),
    #[error("The coordinate #{1} of point #{0} ({2}) is larger than the reference point coordinate ({3}). The reference point must dominate all points")]
    NonDominatedPoint(usize, usize, f64, f64),
    #[error("The {0} index {1} does not exist")]
    NonExistingIndex(String, usize),
}
