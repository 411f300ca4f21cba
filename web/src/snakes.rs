use gloo::timers::callback::Timeout;
use std::rc::Rc;
use tabletop_core::{
    BOARD_SIDE, BoardLayout, Die, DieFace, JumpKind, Player, RollReport, SeededDie,
    SnakesAndLadders, square_at,
};
use yew::prelude::*;

/// Pause between showing the die and moving the token.
const ROLL_DELAY_MS: u32 = 360;

/// Mutable side of a race: the state, the die, and a roll waiting to land.
#[derive(Clone, Debug)]
pub(crate) struct RaceSession {
    race: SnakesAndLadders,
    die: SeededDie,
    pending: Option<DieFace>,
    last_report: Option<RollReport>,
}

impl RaceSession {
    fn new(seed: u64) -> Self {
        Self {
            race: SnakesAndLadders::new(),
            die: SeededDie::new(seed),
            pending: None,
            last_report: None,
        }
    }

    fn can_roll(&self) -> bool {
        self.pending.is_none() && !self.race.is_finished()
    }

    /// Rolls the die, the face is applied later by [`Self::commit_roll`].
    fn request_roll(&mut self) -> Option<DieFace> {
        if !self.can_roll() {
            return None;
        }

        let face = self.die.roll();
        log::debug!("{} rolled {}", self.race.active_player(), face);
        self.pending = Some(face);
        Some(face)
    }

    fn commit_roll(&mut self, layout: &BoardLayout, face: DieFace) -> bool {
        if self.pending != Some(face) {
            log::trace!("stale roll {} dropped", face);
            return false;
        }
        self.pending = None;

        let (race, report) = self.race.apply_roll(layout, face);
        let updated = report.outcome.has_update();
        self.race = race;
        self.last_report = Some(report);
        updated
    }

    fn restart(&mut self) {
        self.race = SnakesAndLadders::new();
        self.pending = None;
        self.last_report = None;
    }

    /// Face to show under the roll button.
    fn shown_face(&self) -> Option<DieFace> {
        if self.race.is_finished() {
            None
        } else {
            self.pending.or(self.race.last_roll())
        }
    }

    /// Short narration of the jumps taken by the last roll.
    fn jump_summary(&self) -> Option<String> {
        let report = self.last_report.as_ref()?;
        if report.path.is_empty() {
            return None;
        }

        let hops: Vec<String> = report
            .path
            .iter()
            .map(|jump| match jump.kind {
                JumpKind::Snake => format!("🐍 {} → {}", jump.from, jump.to),
                JumpKind::Ladder => format!("🪜 {} → {}", jump.from, jump.to),
            })
            .collect();
        Some(hops.join(", "))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Roll,
    CommitRoll(DieFace),
    Restart,
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct RaceProps {
    pub layout: Rc<BoardLayout>,
    pub seed: u64,
}

#[derive(Properties, Clone, PartialEq)]
struct SquareProps {
    number: u8,
    players: Vec<Player>,
    jump: Option<JumpKind>,
}

#[function_component(SquareView)]
fn square_component(props: &SquareProps) -> Html {
    let SquareProps {
        number,
        players,
        jump,
    } = props.clone();

    let class = classes!(
        "snl-square",
        match jump {
            Some(JumpKind::Snake) => classes!("snake"),
            Some(JumpKind::Ladder) => classes!("ladder"),
            None => classes!(),
        },
        (!players.is_empty()).then_some("occupied")
    );

    html! {
        <div {class}>
            <small>{number.to_string()}</small>
            {
                match jump {
                    Some(JumpKind::Snake) => html! { <span>{"🐍"}</span> },
                    Some(JumpKind::Ladder) => html! { <span>{"🪜"}</span> },
                    None => html! {},
                }
            }
            <div class="tokens">
                {
                    for players.iter().map(|player| html! {
                        <span class={classes!("token", format!("player-{}", player.number()))}
                            title={player.to_string()}/>
                    })
                }
            </div>
        </div>
    }
}

#[derive(Debug)]
pub(crate) struct RaceView {
    session: RaceSession,
    _roll_timer: Option<Timeout>,
}

impl Component for RaceView {
    type Message = Msg;
    type Properties = RaceProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            session: RaceSession::new(ctx.props().seed),
            _roll_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Roll => match self.session.request_roll() {
                Some(face) => {
                    let link = ctx.link().clone();
                    self._roll_timer = Some(Timeout::new(ROLL_DELAY_MS, move || {
                        link.send_message(Msg::CommitRoll(face))
                    }));
                    true
                }
                None => false,
            },
            Msg::CommitRoll(face) => {
                self._roll_timer = None;
                self.session.commit_roll(&ctx.props().layout, face)
            }
            Msg::Restart => {
                // dropping the timeout cancels a roll still in flight
                self._roll_timer = None;
                self.session.restart();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let layout = &ctx.props().layout;
        let race = &self.session.race;
        let finished = race.is_finished();

        let cb_roll = ctx.link().callback(|_: MouseEvent| Msg::Roll);
        let cb_restart = ctx.link().callback(|_: MouseEvent| Msg::Restart);

        let roll_class = classes!(
            "roll",
            if finished {
                "game-over".to_string()
            } else {
                format!("player-{}", race.active_player().number())
            }
        );

        html! {
            <section class="snl-game">
                <div class="snl-status">{race.announcement().to_string()}</div>
                <div class="snl-board">
                    {
                        for (0..BOARD_SIDE).map(|row| html! {
                            <div class="snl-row">
                                {
                                    for (0..BOARD_SIDE).filter_map(|col| square_at(row, col)).map(|number| {
                                        let players: Vec<Player> = Player::ALL
                                            .into_iter()
                                            .filter(|&player| race.position(player) == number)
                                            .collect();
                                        let jump = layout.jump_at(number).map(|jump| jump.kind);
                                        html! {
                                            <SquareView key={number.to_string()} {number} {players} {jump}/>
                                        }
                                    })
                                }
                            </div>
                        })
                    }
                </div>
                <button class={roll_class} onclick={cb_roll} disabled={!self.session.can_roll()}>
                    { if finished { "Game Over" } else { "Roll Dice 🎲" } }
                </button>
                <div class="last-roll">
                    {
                        self.session
                            .shown_face()
                            .map(|face| format!("Last Dice: {}", face))
                            .unwrap_or_default()
                    }
                </div>
                <div class="jumps">{self.session.jump_summary().unwrap_or_default()}</div>
                <button class="restart" onclick={cb_restart}>{"Restart Game"}</button>
            </section>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabletop_core::{Announcement, RollOutcome};

    fn layout() -> BoardLayout {
        BoardLayout::classic().unwrap()
    }

    #[test]
    fn roll_waits_for_commit() {
        let layout = layout();
        let mut session = RaceSession::new(1);

        let face = session.request_roll().unwrap();
        assert_eq!(session.shown_face(), Some(face));
        assert_eq!(session.request_roll(), None);
        assert_eq!(session.race, SnakesAndLadders::new());

        assert!(session.commit_roll(&layout, face));
        assert!(session.can_roll());
        assert_eq!(session.race.last_roll(), Some(face));
    }

    #[test]
    fn stale_commit_is_dropped() {
        let layout = layout();
        let mut session = RaceSession::new(1);

        let face = session.request_roll().unwrap();
        session.restart();

        assert!(!session.commit_roll(&layout, face));
        assert_eq!(session.race, SnakesAndLadders::new());
    }

    #[test]
    fn session_plays_to_a_finish() {
        let layout = layout();
        let mut session = RaceSession::new(99);

        for _ in 0..10_000 {
            let Some(face) = session.request_roll() else {
                break;
            };
            session.commit_roll(&layout, face);
        }

        assert!(session.race.is_finished());
        assert!(!session.can_roll());
        assert_eq!(session.shown_face(), None);
        let report = session.last_report.as_ref().unwrap();
        assert_eq!(report.outcome, RollOutcome::Won);
        assert!(matches!(
            session.race.announcement(),
            Announcement::Winner(_)
        ));
    }

    #[test]
    fn jump_summary_lists_hops() {
        let layout = layout();
        let mut session = RaceSession::new(5);
        let one = DieFace::new(1).unwrap();

        session.pending = Some(one);
        session.commit_roll(&layout, one);

        assert_eq!(session.jump_summary().as_deref(), Some("🪜 2 → 38"));
    }
}
