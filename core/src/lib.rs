#![no_std]

extern crate alloc;

pub use dice::*;
pub use error::*;
pub use layout::*;
pub use snakes::*;
pub use tictactoe::*;
pub use types::*;

mod dice;
mod error;
mod layout;
mod snakes;
mod tictactoe;
mod types;
