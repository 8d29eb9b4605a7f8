use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match a 3x3 grid")]
    InvalidBoardShape,
    #[error("Invalid cell symbol {0:?}")]
    InvalidCellSymbol(char),
}

pub type Result<T> = core::result::Result<T, GameError>;
