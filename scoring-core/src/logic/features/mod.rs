//! Features Module - Feature schema and validated input vectors

pub mod layout;
pub mod vector;

#[cfg(test)]
mod tests;

pub use layout::{
    feature_index, feature_name, layout_hash, LayoutInfo, LayoutMismatch, FEATURE_COUNT,
    FEATURE_LAYOUT, FEATURE_VERSION,
};
pub use vector::FeatureVector;
