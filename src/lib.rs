//! Exact calculation of the hyper-volume indicator of a set of points, the Lebesgue measure of
//! the region dominated by the points and bounded by a reference point. This is the standard
//! metric used to compare the solutions of multi-objective optimisation algorithms.
//!
//! The main algorithm is the WFG algorithm by [While et al. (2012)](http://dx.doi.org/10.1109/TEVC.2010.2077298)
//! (see [`metrics::Wfg`]), which slices the points along one dimension at a time and recurses on
//! the exclusive hyper-volume of each point. Two- and three-dimensional sweep algorithms are
//! available as terminal solvers or on their own.
//!
//! # Example
//! ```
//!  use hv_wfg::metrics::{HyperVolume, HyperVolumeSolver, Wfg};
//!
//!  let points = vec![
//!     vec![1.0, 4.0, 2.0],
//!     vec![2.0, 1.0, 3.0],
//!     vec![3.0, 2.0, 1.0],
//!  ];
//!  let reference_point = [5.0, 5.0, 5.0];
//!
//!  let hv = HyperVolume::new(&points, &reference_point).unwrap();
//!  println!("Hyper-volume is {}", hv.compute());
//!
//!  // stop the recursion at 3 dimensions and use the 3D sweep
//!  let wfg = Wfg::new(3).unwrap();
//!  println!("Hyper-volume is {}", wfg.compute(&points, &reference_point).unwrap());
//! ```
pub mod core;
pub mod metrics;
pub mod utils;
