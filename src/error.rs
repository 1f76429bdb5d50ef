use thiserror::Error;

/// Errors raised while configuring or running the IBD generator.
#[derive(Error, Debug)]
pub enum IbdError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Spectrum line {line} could not be parsed: '{content}'")]
    SpectrumParse { line: usize, content: String },

    #[error("Invalid spectrum: {0}")]
    InvalidSpectrum(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Sampling envelope is not positive")]
    EmptyEnvelope,

    #[error("Rejection sampling gave up after {iterations} iterations")]
    EnvelopeExhausted { iterations: usize },
}

pub type IbdResult<T> = Result<T, IbdError>;
