use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unrecognized {field} category: '{value}'")]
    UnrecognizedCategory { field: &'static str, value: String },
}
