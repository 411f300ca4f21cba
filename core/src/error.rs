use thiserror::Error;

use crate::Square;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cell index {0}, expected 0..=8")]
    InvalidCell(usize),
    #[error("Invalid die value {0}, expected 1..=6")]
    InvalidRoll(u8),
    #[error("Board mark counts cannot come from alternating play")]
    UnbalancedBoard,
    #[error("Square {0} is outside the board")]
    SquareOutOfRange(Square),
    #[error("Square {0} jumps to itself")]
    SelfJump(Square),
    #[error("Jump {from} -> {to} goes the wrong way")]
    WrongDirection { from: Square, to: Square },
    #[error("Square {0} has more than one jump")]
    DuplicateEntry(Square),
    #[error("The final square cannot start a jump")]
    JumpFromFinalSquare,
    #[error("Jumps starting at square {0} form a cycle")]
    JumpCycle(Square),
}

pub type Result<T> = core::result::Result<T, GameError>;
