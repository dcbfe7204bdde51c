//! Error types for cadenza

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CadenzaError {
    #[error("invalid note name {0:?}: expected an uppercase letter C-B, optionally followed by # or b")]
    InvalidNote(String),
    #[error("a scale listing needs exactly 8 notes (7 degrees plus the octave), got {0}")]
    ScaleLength(usize),
}

pub type Result<T> = std::result::Result<T, CadenzaError>;
