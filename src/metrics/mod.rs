pub use hv_wfg::{Wfg, WfgConfig};
pub use hypervolume::{estimate_reference_point, hyper_volume, HyperVolume};
pub use hypervolume_2d::HyperVolume2D;
pub use hypervolume_3d::HyperVolume3D;
pub use solver::HyperVolumeSolver;

pub mod dominance;
mod hv_wfg;
pub mod hypervolume;
pub mod hypervolume_2d;
pub mod hypervolume_3d;
mod solver;
pub mod volume;
