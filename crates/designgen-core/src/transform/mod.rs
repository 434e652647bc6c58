pub mod name_normalizer;
pub mod swagger_to_model;

pub use swagger_to_model::{NormalizeOptions, normalize, normalize_with_options};
