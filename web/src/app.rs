use std::rc::Rc;
use tabletop_core::BoardLayout;
use yew::prelude::*;

use crate::snakes::RaceView;
use crate::tictactoe::TicTacToeView;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum GameTab {
    #[default]
    TicTacToe,
    SnakesAndLadders,
}

impl GameTab {
    const ALL: [GameTab; 2] = [GameTab::TicTacToe, GameTab::SnakesAndLadders];

    const fn label(self) -> &'static str {
        match self {
            Self::TicTacToe => "Tic Tac Toe",
            Self::SnakesAndLadders => "Snake & Ladder",
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct AppProps {
    pub layout: Rc<BoardLayout>,
    pub seed: u64,
}

#[derive(Properties, Clone, PartialEq)]
struct TabsProps {
    selected: GameTab,
    onselect: Callback<GameTab>,
}

#[function_component(GameTabs)]
fn game_tabs(props: &TabsProps) -> Html {
    html! {
        <nav class="tabs">
            {
                for GameTab::ALL.into_iter().map(|tab| {
                    let onclick = props.onselect.reform(move |_: MouseEvent| tab);
                    let class = classes!("tab-btn", (tab == props.selected).then_some("selected"));
                    html! {
                        <button {class} {onclick}>{tab.label()}</button>
                    }
                })
            }
        </nav>
    }
}

#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let selected = use_state(GameTab::default);

    let onselect = {
        let selected = selected.clone();
        Callback::from(move |tab: GameTab| {
            log::debug!("selected tab: {:?}", tab);
            selected.set(tab);
        })
    };

    html! {
        <div class="tabletop">
            <header>
                <h1>{"Play Tic Tac Toe & Snake & Ladder"}</h1>
            </header>
            <GameTabs selected={*selected} {onselect}/>
            <main>
                {
                    match *selected {
                        GameTab::TicTacToe => html! { <TicTacToeView/> },
                        GameTab::SnakesAndLadders => html! {
                            <RaceView layout={props.layout.clone()} seed={props.seed}/>
                        },
                    }
                }
            </main>
        </div>
    }
}
