//! The [`Producer`] trait and its function adapter.
pub mod func;
pub mod traits;

pub use func::*;
pub use traits::*;
