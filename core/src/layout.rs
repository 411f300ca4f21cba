use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Snakes of the classic board, head to tail.
pub const CLASSIC_SNAKES: &[(Square, Square)] = &[
    (99, 7),
    (92, 35),
    (74, 53),
    (62, 19),
    (49, 11),
    (46, 25),
    (16, 6),
];

/// Ladders of the classic board, foot to top.
pub const CLASSIC_LADDERS: &[(Square, Square)] = &[
    (2, 38),
    (7, 14),
    (22, 58),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (78, 98),
    (87, 94),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JumpKind {
    Snake,
    Ladder,
}

/// One hop taken while chasing snakes and ladders.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jump {
    pub kind: JumpKind,
    pub from: Square,
    pub to: Square,
}

/// Hops of a single move, classic chains are at most two long.
pub type JumpPath = SmallVec<[Jump; 4]>;

/// Validated snake and ladder placement.
///
/// Construction rejects anything that would stop chase resolution from
/// reaching a fixed point, so [`BoardLayout::resolve`] always terminates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardLayout {
    snakes: HashMap<Square, Square>,
    ladders: HashMap<Square, Square>,
}

impl BoardLayout {
    pub fn new(snakes: &[(Square, Square)], ladders: &[(Square, Square)]) -> Result<Self> {
        let mut layout = Self {
            snakes: HashMap::with_capacity(snakes.len()),
            ladders: HashMap::with_capacity(ladders.len()),
        };

        for (kind, entries) in [(JumpKind::Snake, snakes), (JumpKind::Ladder, ladders)] {
            for &(from, to) in entries {
                check_entry(kind, from, to)?;
                if layout.jump_at(from).is_some() {
                    return Err(GameError::DuplicateEntry(from));
                }
                match kind {
                    JumpKind::Snake => layout.snakes.insert(from, to),
                    JumpKind::Ladder => layout.ladders.insert(from, to),
                };
            }
        }

        layout.check_acyclic()?;
        log::debug!(
            "board layout ready: {} snakes, {} ladders",
            layout.snakes.len(),
            layout.ladders.len()
        );
        Ok(layout)
    }

    pub fn classic() -> Result<Self> {
        Self::new(CLASSIC_SNAKES, CLASSIC_LADDERS)
    }

    /// Tail of the snake whose head is on `square`.
    pub fn snake_at(&self, square: Square) -> Option<Square> {
        self.snakes.get(&square).copied()
    }

    /// Top of the ladder whose foot is on `square`.
    pub fn ladder_at(&self, square: Square) -> Option<Square> {
        self.ladders.get(&square).copied()
    }

    /// Jump starting on `square`, snakes checked first.
    pub fn jump_at(&self, square: Square) -> Option<Jump> {
        let snake = self.snake_at(square).map(|to| Jump {
            kind: JumpKind::Snake,
            from: square,
            to,
        });
        snake.or_else(|| {
            self.ladder_at(square).map(|to| Jump {
                kind: JumpKind::Ladder,
                from: square,
                to,
            })
        })
    }

    /// Follows jumps from `square` until landing on a square with none.
    pub fn resolve(&self, square: Square) -> (Square, JumpPath) {
        let mut current = square;
        let mut path = JumpPath::new();

        while let Some(jump) = self.jump_at(current) {
            log::trace!("{:?} {} -> {}", jump.kind, jump.from, jump.to);
            path.push(jump);
            current = jump.to;
        }

        (current, path)
    }

    pub fn snakes(&self) -> impl Iterator<Item = Jump> + '_ {
        self.snakes.iter().map(|(&from, &to)| Jump {
            kind: JumpKind::Snake,
            from,
            to,
        })
    }

    pub fn ladders(&self) -> impl Iterator<Item = Jump> + '_ {
        self.ladders.iter().map(|(&from, &to)| Jump {
            kind: JumpKind::Ladder,
            from,
            to,
        })
    }

    fn check_acyclic(&self) -> Result<()> {
        let limit = self.snakes.len() + self.ladders.len();

        for start in START_SQUARE..=FINAL_SQUARE {
            let mut current = start;
            let mut hops = 0;
            while let Some(jump) = self.jump_at(current) {
                hops += 1;
                if hops > limit {
                    return Err(GameError::JumpCycle(start));
                }
                current = jump.to;
            }
        }

        Ok(())
    }
}

fn check_entry(kind: JumpKind, from: Square, to: Square) -> Result<()> {
    for square in [from, to] {
        if !(START_SQUARE..=FINAL_SQUARE).contains(&square) {
            return Err(GameError::SquareOutOfRange(square));
        }
    }

    if from == to {
        return Err(GameError::SelfJump(from));
    }

    if from == FINAL_SQUARE {
        return Err(GameError::JumpFromFinalSquare);
    }

    let downwards = to < from;
    match (kind, downwards) {
        (JumpKind::Snake, true) | (JumpKind::Ladder, false) => Ok(()),
        _ => Err(GameError::WrongDirection { from, to }),
    }
}

/// Square drawn at `(row, col)` of the 10×10 grid.
///
/// Row 0 is the top of the board. Numbering zig-zags from square 1 in the
/// bottom-left corner, so every other row runs right to left.
pub const fn square_at(row: u8, col: u8) -> Option<Square> {
    if row >= BOARD_SIDE || col >= BOARD_SIDE {
        return None;
    }

    let from_bottom = BOARD_SIDE - 1 - row;
    let along = if from_bottom % 2 == 1 {
        BOARD_SIDE - 1 - col
    } else {
        col
    };
    Some(from_bottom * BOARD_SIDE + along + START_SQUARE)
}

/// Inverse of [`square_at`].
pub const fn grid_position(square: Square) -> Option<(u8, u8)> {
    if square < START_SQUARE || square > FINAL_SQUARE {
        return None;
    }

    let offset = square - START_SQUARE;
    let from_bottom = offset / BOARD_SIDE;
    let along = offset % BOARD_SIDE;
    let col = if from_bottom % 2 == 1 {
        BOARD_SIDE - 1 - along
    } else {
        along
    };
    Some((BOARD_SIDE - 1 - from_bottom, col))
}
