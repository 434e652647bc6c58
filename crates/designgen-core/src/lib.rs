pub mod config;
pub mod error;
pub mod model;
pub mod parse;
pub mod transform;

/// A generated file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for generators that turn a canonical API model into a design program.
pub trait DesignGenerator {
    type Options;
    type Error: std::error::Error;
    fn generate(
        &self,
        model: &model::ApiModel,
        options: &Self::Options,
    ) -> Result<GeneratedFile, Self::Error>;
}
