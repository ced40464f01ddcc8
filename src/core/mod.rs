pub use error::HvError;
pub use objective::ObjectiveDirection;

mod error;
mod objective;
#[cfg(test)]
pub(crate) mod test_utils;
