use core::fmt;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Square number on the race board, `START_SQUARE..=FINAL_SQUARE`.
pub type Square = u8;

pub const START_SQUARE: Square = 1;

/// Landing exactly here wins the race.
pub const FINAL_SQUARE: Square = 100;

/// Squares per row (and rows per board) of the race board.
pub const BOARD_SIDE: u8 = 10;

/// Tic-Tac-Toe mark, `X` always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::O => f.write_str("O"),
        }
    }
}

/// Seat in the race, `One` always rolls first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Zero-based index into per-player arrays.
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// One-based number shown to people.
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Face of a six-sided die, only ever holds `1..=6`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieFace(u8);

impl DieFace {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub(crate) const fn new_unchecked(value: u8) -> Self {
        Self(value)
    }

    pub const fn new(value: u8) -> Result<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(GameError::InvalidRoll(value))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Rolling the top face earns another roll.
    pub const fn is_max(self) -> bool {
        self.0 == Self::MAX
    }
}

impl TryFrom<u8> for DieFace {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> Self {
        face.0
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
