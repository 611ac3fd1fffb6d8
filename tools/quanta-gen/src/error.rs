use libquanta::QuantaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Quanta(#[from] QuantaError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{prompt} expected a number, got `{input}`")]
    InvalidInput { prompt: &'static str, input: String },

    #[error("{prompt} no input (end of stream)")]
    UnexpectedEof { prompt: &'static str },
}
