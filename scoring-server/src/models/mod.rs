//! Data models

pub mod scoring;
pub mod model_info;

pub use scoring::*;
pub use model_info::*;
