use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{IllegalAction, Square};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Lists the legal moves of the piece on a square.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Moves {
    /// The square in algebraic notation, e.g. `e2`.
    square: Square,

    /// Inspect the game saved in this JSON file instead of a new one.
    #[clap(short, long)]
    load: Option<PathBuf>,
}

impl Moves {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let game = super::load(self.load.as_deref())?;
        let moves = game
            .moves(self.square)
            .ok_or(IllegalAction::NoPieceAtSource(self.square))?;

        info!(square = %self.square, count = moves.len());

        for m in moves {
            println!("{m}");
        }

        Ok(())
    }
}
