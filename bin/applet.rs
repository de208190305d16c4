use anyhow::{ensure, Context, Error as Anyhow};
use clap::Subcommand;
use derive_more::From;
use lib::chess::{Color, Game, Piece, Role};
use lib::util::Enum;
use std::{fs::File, io::BufReader, path::Path};
use tracing::{info, instrument};

mod moves;
mod play;

#[derive(From, Subcommand)]
pub enum Applet {
    Play(play::Play),
    Moves(moves::Moves),
}

impl Default for Applet {
    fn default() -> Self {
        play::Play::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Play(a) => a.execute(),
            Applet::Moves(a) => a.execute(),
        }
    }
}

/// Loads a game saved as JSON, or starts a new one if no file is given.
#[instrument(level = "trace", err)]
fn load(path: Option<&Path>) -> Result<Game, Anyhow> {
    let Some(path) = path else {
        return Ok(Game::new());
    };

    let file = File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;
    let game: Game = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to load a game from `{}`", path.display()))?;

    for side in Color::iter() {
        let king = Piece::new(side, Role::King);
        let kings = game.board().iter().filter(|&(p, _)| p == king).count();
        ensure!(kings == 1, "expected exactly one {side} king, found {kings}");
    }

    info!(path = %path.display(), turn = %game.turn(), state = %game.state(), "loaded game");

    Ok(game)
}
