use tabletop_core::{CELL_COUNT, TicTacToe, TicTacToeStatus, winning_line};
use yew::prelude::*;

/// Status text shown above the board.
fn status_line(game: &TicTacToe) -> String {
    match game.status() {
        TicTacToeStatus::Win(mark) => format!("Winner: {}", mark),
        TicTacToeStatus::Draw => "It's a draw!".to_string(),
        TicTacToeStatus::InProgress => format!("Next player: {}", game.active_mark()),
    }
}

/// Applies a click, `None` when the board should not re-render.
fn click_cell(game: &TicTacToe, cell: usize) -> Option<TicTacToe> {
    match game.apply_move(cell) {
        Ok((next, outcome)) if outcome.has_update() => Some(next),
        Ok(_) => None,
        Err(err) => {
            log::error!("rejected click on cell {}: {}", cell, err);
            None
        }
    }
}

#[function_component(TicTacToeView)]
pub(crate) fn tictactoe_view() -> Html {
    let game = use_state(TicTacToe::new);

    let finished = game.is_finished();
    let line = winning_line(game.board());

    let on_restart = {
        let game = game.clone();
        Callback::from(move |_: MouseEvent| game.set(TicTacToe::new()))
    };

    html! {
        <section class="ttt-game">
            <div class="ttt-status">{status_line(&game)}</div>
            <div class="ttt-board">
                {
                    for (0..CELL_COUNT).map(|cell| {
                        let mark = game.board()[cell];
                        let onclick = {
                            let game = game.clone();
                            Callback::from(move |_: MouseEvent| {
                                if let Some(next) = click_cell(&game, cell) {
                                    game.set(next);
                                }
                            })
                        };
                        let highlighted = line.is_some_and(|line| line.contains(&cell));
                        let class = classes!("ttt-square", highlighted.then_some("win"));
                        html! {
                            <button {class} {onclick} disabled={finished || mark.is_some()}>
                                {mark.map(|mark| mark.to_string()).unwrap_or_default()}
                            </button>
                        }
                    })
                }
            </div>
            <button class="restart" onclick={on_restart}>{"Restart"}</button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(cells: &[usize]) -> TicTacToe {
        cells
            .iter()
            .fold(TicTacToe::new(), |game, &cell| click_cell(&game, cell).unwrap())
    }

    #[test]
    fn status_line_follows_game() {
        assert_eq!(status_line(&TicTacToe::new()), "Next player: X");
        assert_eq!(status_line(&play(&[4])), "Next player: O");
        assert_eq!(status_line(&play(&[0, 3, 1, 4, 2])), "Winner: X");
        assert_eq!(
            status_line(&play(&[0, 1, 2, 4, 3, 5, 7, 6, 8])),
            "It's a draw!"
        );
    }

    #[test]
    fn stale_clicks_do_not_rerender() {
        let game = play(&[4]);
        assert_eq!(click_cell(&game, 4), None);

        let won = play(&[0, 3, 1, 4, 2]);
        assert_eq!(click_cell(&won, 8), None);

        assert_eq!(click_cell(&game, 42), None);
    }
}
