use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Project configuration loaded from `.designgen.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DesignGenConfig {
    /// Go package name written in the program header.
    pub package: String,
    pub formatter: FormatterKind,
    /// Program used when `formatter` resolves to gofmt.
    pub gofmt: String,
    /// Map `paths` and `definitions` into resources, actions, and types.
    pub operations: bool,
}

impl Default for DesignGenConfig {
    fn default() -> Self {
        Self {
            package: "design".to_string(),
            formatter: FormatterKind::Auto,
            gofmt: "gofmt".to_string(),
            operations: false,
        }
    }
}

/// Which formatter canonicalizes the rendered program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatterKind {
    /// gofmt when it can be spawned, the builtin formatter otherwise.
    #[default]
    Auto,
    Gofmt,
    Builtin,
    /// Emit the raw buffer unchanged.
    None,
}

impl FormatterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatterKind::Auto => "auto",
            FormatterKind::Gofmt => "gofmt",
            FormatterKind::Builtin => "builtin",
            FormatterKind::None => "none",
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".designgen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<DesignGenConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: DesignGenConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# designgen configuration
package: design        # Go package of the generated design

formatter: auto        # auto | gofmt | builtin | none
gofmt: gofmt           # path to the gofmt program

# Map swagger paths/definitions into Resource, Action and Type declarations.
operations: false
"#
}
