use crate::TurnPhase;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("console io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed while waiting for {0:?}")]
    InputClosed(TurnPhase),
}
