use clap::Parser;
use std::rc::Rc;
use tabletop_core::BoardLayout;
use wasm_bindgen::prelude::*;

mod app;
mod snakes;
mod tictactoe;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Seed the die instead of using a random one
    #[arg(short, long)]
    seed: Option<u64>,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }

    let seed = args.seed.unwrap_or_else(utils::js_random_seed);

    let layout = BoardLayout::classic().expect("Snake and ladder layout is invalid");

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    let props = app::AppProps {
        layout: Rc::new(layout),
        seed,
    };

    log::debug!("App started");
    yew::Renderer::<app::App>::with_root_and_props(root, props).render();
}
