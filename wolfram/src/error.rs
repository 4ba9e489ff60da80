// error.rs - Errors surfaced by the automaton core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("rule must be a decimal number, got {0:?}")]
    NotANumber(String),

    #[error("rule must be between 0 and 255, got {0}")]
    OutOfRange(String),
}
