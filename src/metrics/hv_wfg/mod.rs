pub use config::WfgConfig;
pub use wfg::Wfg;

mod config;
mod frames;
mod wfg;
