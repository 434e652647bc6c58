use std::io::Write;

use designgen_core::config::{DesignGenConfig, FormatterKind};
use designgen_core::model::ApiModel;
use designgen_core::{DesignGenerator, GeneratedFile};

use crate::error::GenerateError;
use crate::format::{format_source, formatter_for};
use crate::render::DesignRenderer;

/// Options for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoaOptions {
    pub package: String,
    pub formatter: FormatterKind,
    pub gofmt: String,
}

impl Default for GoaOptions {
    fn default() -> Self {
        DesignGenConfig::default().into()
    }
}

impl From<DesignGenConfig> for GoaOptions {
    fn from(config: DesignGenConfig) -> Self {
        Self {
            package: config.package,
            formatter: config.formatter,
            gofmt: config.gofmt,
        }
    }
}

/// goa v1 design generator.
pub struct GoaDesignGenerator {
    renderer: DesignRenderer,
}

impl GoaDesignGenerator {
    pub fn new() -> Result<Self, GenerateError> {
        Ok(Self {
            renderer: DesignRenderer::new()?,
        })
    }

    /// Generate, writing the unformatted program to `diagnostics` if formatting fails.
    pub fn generate_with_diagnostics(
        &self,
        model: &ApiModel,
        options: &GoaOptions,
        diagnostics: &mut dyn Write,
    ) -> Result<GeneratedFile, GenerateError> {
        let raw = self.renderer.render(model, &options.package)?;
        let formatter = formatter_for(options.formatter, &options.gofmt);
        let content = format_source(raw, formatter.as_ref(), diagnostics)?;
        log::debug!(
            "formatted design with {} ({} bytes)",
            formatter.name(),
            content.len()
        );

        Ok(GeneratedFile {
            path: "design.go".to_string(),
            content,
        })
    }
}

impl DesignGenerator for GoaDesignGenerator {
    type Options = GoaOptions;
    type Error = GenerateError;

    fn generate(
        &self,
        model: &ApiModel,
        options: &GoaOptions,
    ) -> Result<GeneratedFile, GenerateError> {
        self.generate_with_diagnostics(model, options, &mut std::io::stderr())
    }
}
