use crate::*;
pub use seeded::*;

mod seeded;

/// Source of die rolls handed to [`SnakesAndLadders::apply_roll`].
///
/// The engine never rolls on its own, callers pick the die.
pub trait Die {
    fn roll(&mut self) -> DieFace;
}
