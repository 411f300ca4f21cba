use core::fmt;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaceStatus {
    #[default]
    InProgress,
    Won(Player),
}

impl RaceStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won(_))
    }
}

/// Outcome of a single roll
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollOutcome {
    /// Game was already won, nothing moved
    NoChange,
    /// Token moved and the race goes on
    Moved,
    /// Roll would have passed the final square, move forfeited
    Overshot,
    /// Token reached the final square
    Won,
}

impl RollOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Status line picked from the rules, rendered through `Display`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Announcement {
    Winner(Player),
    RollAgain(Player),
    NextTurn(Player),
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(player) => write!(f, "{} wins! 🏆", player),
            Self::RollAgain(player) => write!(f, "{} rolled a 6! Go again.", player),
            Self::NextTurn(player) => write!(f, "{}'s turn! Roll the dice 🎲", player),
        }
    }
}

/// Everything a roll did, for narrating it.
#[derive(Clone, Debug, PartialEq)]
pub struct RollReport {
    pub player: Player,
    pub roll: DieFace,
    pub outcome: RollOutcome,
    pub from: Square,
    /// Square the roll reached before any jump, `from` when nothing moved.
    pub landed: Square,
    pub to: Square,
    pub path: JumpPath,
    pub next: Player,
    pub announcement: Announcement,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SnakesAndLadders {
    positions: [Square; 2],
    active: Player,
    last_roll: Option<DieFace>,
    announcement: Announcement,
}

impl SnakesAndLadders {
    /// Both tokens on the first square, player one to roll.
    pub const fn new() -> Self {
        Self {
            positions: [START_SQUARE; 2],
            active: Player::One,
            last_roll: None,
            announcement: Announcement::NextTurn(Player::One),
        }
    }

    pub const fn positions(&self) -> [Square; 2] {
        self.positions
    }

    pub const fn position(&self, player: Player) -> Square {
        self.positions[player.index()]
    }

    pub const fn active_player(&self) -> Player {
        self.active
    }

    pub const fn last_roll(&self) -> Option<DieFace> {
        self.last_roll
    }

    pub const fn announcement(&self) -> Announcement {
        self.announcement
    }

    pub fn status(&self) -> RaceStatus {
        Player::ALL
            .into_iter()
            .find(|&player| self.position(player) == FINAL_SQUARE)
            .map_or(RaceStatus::InProgress, RaceStatus::Won)
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    /// Moves the active player by `roll` on `layout`.
    ///
    /// A roll past the final square forfeits the move. A 6 keeps the turn
    /// unless it was forfeited or won the game. Rolls after a win leave the
    /// state untouched and report [`RollOutcome::NoChange`].
    pub fn apply_roll(&self, layout: &BoardLayout, roll: DieFace) -> (Self, RollReport) {
        let player = self.active;
        let from = self.position(player);

        if self.is_finished() {
            log::trace!("roll of {} ignored, race already won", roll);
            let report = RollReport {
                player,
                roll,
                outcome: RollOutcome::NoChange,
                from,
                landed: from,
                to: from,
                path: JumpPath::new(),
                next: player,
                announcement: self.announcement,
            };
            return (*self, report);
        }

        let target = from.saturating_add(roll.get());
        let (outcome, landed, to, path) = if target > FINAL_SQUARE {
            log::debug!("{} rolled {} from {}, overshoots", player, roll, from);
            (RollOutcome::Overshot, from, from, JumpPath::new())
        } else {
            let (to, path) = layout.resolve(target);
            log::debug!("{} rolled {}: {} -> {} -> {}", player, roll, from, target, to);
            let outcome = if to == FINAL_SQUARE {
                RollOutcome::Won
            } else {
                RollOutcome::Moved
            };
            (outcome, target, to, path)
        };

        let (next, announcement) = match outcome {
            RollOutcome::Won => (player, Announcement::Winner(player)),
            RollOutcome::Moved if roll.is_max() => (player, Announcement::RollAgain(player)),
            _ => (player.other(), Announcement::NextTurn(player.other())),
        };

        let mut state = *self;
        state.positions[player.index()] = to;
        state.active = next;
        state.last_roll = Some(roll);
        state.announcement = announcement;

        let report = RollReport {
            player,
            roll,
            outcome,
            from,
            landed,
            to,
            path,
            next,
            announcement,
        };
        (state, report)
    }
}

impl<'de> Deserialize<'de> for SnakesAndLadders {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Snapshot {
            positions: [Square; 2],
            active: Player,
            last_roll: Option<DieFace>,
            announcement: Announcement,
        }

        let Snapshot {
            positions,
            active,
            last_roll,
            announcement,
        } = Snapshot::deserialize(deserializer)?;

        if let Some(&square) = positions
            .iter()
            .find(|square| !(START_SQUARE..=FINAL_SQUARE).contains(square))
        {
            return Err(D::Error::custom(GameError::SquareOutOfRange(square)));
        }

        Ok(Self {
            positions,
            active,
            last_roll,
            announcement,
        })
    }
}

impl Default for SnakesAndLadders {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn layout() -> BoardLayout {
        BoardLayout::classic().unwrap()
    }

    fn face(value: u8) -> DieFace {
        DieFace::new(value).unwrap()
    }

    fn at(positions: [Square; 2], active: Player) -> SnakesAndLadders {
        SnakesAndLadders {
            positions,
            active,
            ..SnakesAndLadders::new()
        }
    }

    #[test]
    fn fresh_race_starts_on_square_one() {
        let race = SnakesAndLadders::new();

        assert_eq!(race.positions(), [1, 1]);
        assert_eq!(race.active_player(), Player::One);
        assert_eq!(race.last_roll(), None);
        assert_eq!(race.status(), RaceStatus::InProgress);
        assert_eq!(race.status(), RaceStatus::default());
        assert_eq!(
            race.announcement().to_string(),
            "Player 1's turn! Roll the dice 🎲"
        );
    }

    #[test]
    fn landing_on_ladder_foot_climbs() {
        let (race, report) = SnakesAndLadders::new().apply_roll(&layout(), face(1));

        assert_eq!(race.position(Player::One), 38);
        assert_eq!(report.landed, 2);
        assert_eq!(report.to, 38);
        assert_eq!(report.path.len(), 1);
        assert_eq!(report.outcome, RollOutcome::Moved);
        assert_eq!(race.active_player(), Player::Two);
        assert_eq!(race.last_roll(), Some(face(1)));
    }

    #[test]
    fn landing_on_snake_head_slides() {
        let (race, report) = at([12, 1], Player::One).apply_roll(&layout(), face(4));

        assert_eq!(report.landed, 16);
        assert_eq!(race.position(Player::One), 6);
        assert_eq!(report.path[0].kind, JumpKind::Snake);
        assert_eq!(race.active_player(), Player::Two);
    }

    #[test]
    fn chained_jumps_resolve_fully() {
        // 99 is a snake to 7, which is a ladder to 14
        let (race, report) = at([1, 93], Player::Two).apply_roll(&layout(), face(6));

        assert_eq!(race.position(Player::Two), 14);
        assert_eq!(report.path.len(), 2);
    }

    #[test]
    fn overshoot_forfeits_move_and_passes_turn() {
        let (race, report) = at([95, 1], Player::One).apply_roll(&layout(), face(6));

        assert_eq!(report.outcome, RollOutcome::Overshot);
        assert_eq!(race.position(Player::One), 95);
        assert_eq!(race.active_player(), Player::Two);
        assert_eq!(race.last_roll(), Some(face(6)));
        assert_eq!(race.announcement(), Announcement::NextTurn(Player::Two));
    }

    #[test]
    fn every_overshoot_leaves_position_unchanged() {
        let layout = layout();
        for from in 95..FINAL_SQUARE {
            for value in 1..=6 {
                if from + value <= FINAL_SQUARE {
                    continue;
                }
                let (race, report) = at([1, from], Player::Two).apply_roll(&layout, face(value));
                assert_eq!(race.position(Player::Two), from);
                assert_eq!(report.outcome, RollOutcome::Overshot);
            }
        }
    }

    #[test]
    fn exact_landing_wins_and_freezes_the_race() {
        let layout = layout();
        let (race, report) = at([95, 40], Player::One).apply_roll(&layout, face(5));

        assert_eq!(report.outcome, RollOutcome::Won);
        assert_eq!(race.status(), RaceStatus::Won(Player::One));
        assert_eq!(race.announcement().to_string(), "Player 1 wins! 🏆");

        for value in 1..=6 {
            let (after, report) = race.apply_roll(&layout, face(value));
            assert_eq!(report.outcome, RollOutcome::NoChange);
            assert!(!report.outcome.has_update());
            assert_eq!(after, race);
        }
    }

    #[test]
    fn winning_six_does_not_grant_another_roll() {
        let (race, report) = at([94, 1], Player::One).apply_roll(&layout(), face(6));

        assert_eq!(report.outcome, RollOutcome::Won);
        assert_eq!(race.announcement(), Announcement::Winner(Player::One));
    }

    #[test]
    fn six_keeps_the_turn_on_every_square() {
        let layout = layout();
        for from in START_SQUARE..FINAL_SQUARE {
            if layout.jump_at(from).is_some() {
                continue;
            }
            for player in Player::ALL {
                let mut positions = [START_SQUARE; 2];
                positions[player.index()] = from;
                let (race, report) = at(positions, player).apply_roll(&layout, face(6));

                if report.outcome == RollOutcome::Moved {
                    assert_eq!(race.active_player(), player);
                    assert_eq!(race.announcement(), Announcement::RollAgain(player));
                }
            }
        }
    }

    #[test]
    fn other_rolls_pass_the_turn() {
        let layout = layout();
        for value in 1..=5 {
            let (race, report) = at([50, 1], Player::One).apply_roll(&layout, face(value));
            assert_eq!(report.next, Player::Two);
            assert_eq!(race.active_player(), Player::Two);
        }
    }

    #[test]
    fn ladder_onto_final_square_wins() {
        let layout = BoardLayout::new(&[], &[(97, FINAL_SQUARE)]).unwrap();
        let (race, report) = at([94, 1], Player::One).apply_roll(&layout, face(3));

        assert_eq!(report.landed, 97);
        assert_eq!(report.to, FINAL_SQUARE);
        assert_eq!(report.path.len(), 1);
        assert_eq!(report.outcome, RollOutcome::Won);
        assert_eq!(race.status(), RaceStatus::Won(Player::One));
        assert_eq!(race.announcement(), Announcement::Winner(Player::One));
    }

    #[test]
    fn off_board_positions_are_rejected_on_load() {
        let json = |positions: &str| {
            alloc::format!(
                r#"{{"positions":{},"active":"One","last_roll":null,"announcement":{{"NextTurn":"One"}}}}"#,
                positions
            )
        };

        assert!(serde_json::from_str::<SnakesAndLadders>(&json("[16,250]")).is_err());
        assert!(serde_json::from_str::<SnakesAndLadders>(&json("[0,1]")).is_err());
        assert!(serde_json::from_str::<SnakesAndLadders>(&json("[1,101]")).is_err());

        let race = serde_json::from_str::<SnakesAndLadders>(&json("[16,100]")).unwrap();
        assert_eq!(race.positions(), [16, 100]);
        assert_eq!(race.status(), RaceStatus::Won(Player::Two));
    }

    #[test]
    fn state_round_trips_through_json() {
        let (race, _) = SnakesAndLadders::new().apply_roll(&layout(), face(6));
        let json = serde_json::to_string(&race).unwrap();

        assert_eq!(serde_json::from_str::<SnakesAndLadders>(&json).unwrap(), race);
    }

    #[test]
    fn announcement_texts() {
        assert_eq!(
            Announcement::RollAgain(Player::Two).to_string(),
            "Player 2 rolled a 6! Go again."
        );
        assert_eq!(
            Announcement::NextTurn(Player::One).to_string(),
            "Player 1's turn! Roll the dice 🎲"
        );
        assert_eq!(Announcement::Winner(Player::Two).to_string(), "Player 2 wins! 🏆");
    }

    #[test]
    fn seeded_game_ends_with_a_winner() {
        let layout = layout();
        let mut die = SeededDie::new(2024);
        let mut race = SnakesAndLadders::new();

        for _ in 0..10_000 {
            if race.is_finished() {
                break;
            }
            let (next, report) = race.apply_roll(&layout, die.roll());
            for player in Player::ALL {
                assert_eq!(layout.jump_at(next.position(player)), None);
            }
            assert!(report.outcome.has_update());
            race = next;
        }

        assert!(race.is_finished());
    }
}
