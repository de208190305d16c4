mod board;
mod color;
mod file;
mod game;
mod r#move;
mod movegen;
mod piece;
mod promotion;
mod rank;
mod role;
mod square;
mod state;

pub use board::*;
pub use color::*;
pub use file::*;
pub use game::*;
pub use movegen::Moves;
pub use piece::*;
pub use promotion::*;
pub use r#move::*;
pub use rank::*;
pub use role::*;
pub use square::*;
pub use state::*;
