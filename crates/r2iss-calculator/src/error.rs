use thiserror::Error;

use r2iss_core::error::CoreError;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("invalid input: {0}")]
    Input(#[from] CoreError),
}
