use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("formatter rejected source: {0}")]
    Rejected(String),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("formatter I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid Go package name {0:?}")]
    InvalidPackage(String),

    #[error("failed to render design template: {0}")]
    Template(#[from] minijinja::Error),

    /// Formatting failed; `raw` holds the unformatted program.
    #[error("failed to format generated design: {source}")]
    Format {
        #[source]
        source: FormatError,
        raw: String,
    },
}
