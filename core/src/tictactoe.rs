use core::ops::Index;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::*;

/// Cells on the 3×3 board, indexed row-major.
pub const CELL_COUNT: usize = 9;

/// Win-lines in scan order: rows, then columns, then diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Nine cells, `None` is empty.
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board([Option<Mark>; CELL_COUNT]);

impl Board {
    pub const fn new() -> Self {
        Self([None; CELL_COUNT])
    }

    pub const fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self(cells)
    }

    pub const fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.0
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    pub fn validate_cell(&self, cell: usize) -> Result<usize> {
        if cell < CELL_COUNT {
            Ok(cell)
        } else {
            Err(GameError::InvalidCell(cell))
        }
    }
}

impl Index<usize> for Board {
    type Output = Option<Mark>;

    fn index(&self, cell: usize) -> &Self::Output {
        &self.0[cell]
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicTacToeStatus {
    #[default]
    InProgress,
    Win(Mark),
    Draw,
}

impl TicTacToeStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Win(_) | Self::Draw)
    }

    pub const fn winner(self) -> Option<Mark> {
        match self {
            Self::Win(mark) => Some(mark),
            Self::InProgress | Self::Draw => None,
        }
    }
}

/// First completed win-line in scan order, if any.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WIN_LINES.into_iter().find(|&[a, b, c]| {
        board[a].is_some() && board[a] == board[b] && board[b] == board[c]
    })
}

pub fn evaluate(board: &Board) -> TicTacToeStatus {
    if let Some(mark) = winning_line(board).and_then(|[first, ..]| board[first]) {
        TicTacToeStatus::Win(mark)
    } else if board.is_full() {
        TicTacToeStatus::Draw
    } else {
        TicTacToeStatus::InProgress
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Placed,
    Won(Mark),
    Drew,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TicTacToe {
    board: Board,
    active: Mark,
}

impl TicTacToe {
    /// Empty board with `X` to move.
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            active: Mark::X,
        }
    }

    /// Rebuilds a game from a board reached by alternating play.
    pub fn from_board(board: Board) -> Result<Self> {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);

        let active = if x_count == o_count {
            Mark::X
        } else if x_count == o_count + 1 {
            Mark::O
        } else {
            return Err(GameError::UnbalancedBoard);
        };

        Ok(Self { board, active })
    }

    pub const fn board(&self) -> &Board {
        &self.board
    }

    pub const fn active_mark(&self) -> Mark {
        self.active
    }

    pub fn status(&self) -> TicTacToeStatus {
        evaluate(&self.board)
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    /// Places the active mark on `cell`.
    ///
    /// Occupied cells and finished games leave the state untouched and report
    /// [`MoveOutcome::NoChange`]. Only an index past the board is an error.
    pub fn apply_move(&self, cell: usize) -> Result<(Self, MoveOutcome)> {
        let cell = self.board.validate_cell(cell)?;

        if self.is_finished() {
            log::trace!("move on cell {} ignored, game already ended", cell);
            return Ok((*self, MoveOutcome::NoChange));
        }

        if let Some(mark) = self.board[cell] {
            log::trace!("move on cell {} ignored, already holds {}", cell, mark);
            return Ok((*self, MoveOutcome::NoChange));
        }

        let mut next = *self;
        next.board.0[cell] = Some(self.active);
        next.active = self.active.other();
        log::debug!("{} placed on cell {}", self.active, cell);

        let outcome = match next.status() {
            TicTacToeStatus::InProgress => MoveOutcome::Placed,
            TicTacToeStatus::Win(mark) => {
                log::debug!("{} wins", mark);
                MoveOutcome::Won(mark)
            }
            TicTacToeStatus::Draw => {
                log::debug!("board full, draw");
                MoveOutcome::Drew
            }
        };

        Ok((next, outcome))
    }
}

/// Restored games go through [`TicTacToe::from_board`], the stored mark
/// must agree with the one derived from the board.
impl<'de> Deserialize<'de> for TicTacToe {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Snapshot {
            board: Board,
            active: Mark,
        }

        let Snapshot { board, active } = Snapshot::deserialize(deserializer)?;
        let game = Self::from_board(board).map_err(D::Error::custom)?;
        if game.active != active {
            return Err(D::Error::custom(GameError::UnbalancedBoard));
        }
        Ok(game)
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}
