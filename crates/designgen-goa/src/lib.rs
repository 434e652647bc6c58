pub mod error;
pub mod format;
pub mod generator;
pub mod quote;
pub mod render;
pub mod rules;

pub use error::{FormatError, GenerateError};
pub use format::{
    AutoFormatter, BuiltinFormatter, Gofmt, Passthrough, SourceFormatter, format_source,
    formatter_for,
};
pub use generator::{GoaDesignGenerator, GoaOptions};
pub use render::DesignRenderer;
