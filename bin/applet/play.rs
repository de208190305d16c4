use crate::io::Io;
use anyhow::{bail, Error as Anyhow};
use clap::Parser;
use lib::chess::{Game, GameState, Move, Square};
use std::io::{stdin, stdout};
use std::{path::PathBuf, str::FromStr};
use tracing::{info, instrument, warn};

/// A hot-seat game of chess, read move by move from the standard input.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// Resume the game saved in this JSON file.
    #[clap(short, long)]
    load: Option<PathBuf>,
}

/// Something the players may ask for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Command {
    Play(Move),
    Moves(Square),
    Board,
    Resign,
    Json,
    Quit,
}

impl FromStr for Command {
    type Err = Anyhow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<_> = s.split_whitespace().collect();
        let command = match &tokens[..] {
            ["moves", sq] => Command::Moves(sq.parse()?),
            ["board"] => Command::Board,
            ["resign"] => Command::Resign,
            ["json"] => Command::Json,
            ["quit" | "exit"] => Command::Quit,
            [m] => match m.parse() {
                Ok(m) => Command::Play(m),
                Err(_) => bail!("unknown command `{m}`"),
            },
            _ => bail!("unknown command `{s}`"),
        };

        Ok(command)
    }
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut game = super::load(self.load.as_deref())?;
        let mut io = Io::new(stdout(), stdin());

        io.send(format_args!("{:#}", game.board()))?;

        while game.state().is_active() {
            io.prompt(format_args!("{} to move> ", game.turn()))?;

            let Some(line) = io.recv()? else {
                break;
            };

            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    warn!("{e}");
                    continue;
                }
            };

            match command {
                Command::Play(m) => match game.play(m) {
                    Err(e) => warn!("{e}"),
                    Ok(()) => {
                        io.send(format_args!("{:#}", game.board()))?;
                        if game.state().is_active() && game.is_check(game.turn()) {
                            info!("the {} king is in check", game.turn());
                        }
                    }
                },

                Command::Moves(sq) => match game.moves(sq) {
                    None => warn!("there is no piece on square `{sq}`"),
                    Some(moves) => {
                        let moves: Vec<_> = moves.iter().map(Move::to_string).collect();
                        io.send(moves.join(" "))?;
                    }
                },

                Command::Board => io.send(format_args!("{:#}", game.board()))?,
                Command::Resign => game.resign(game.turn())?,
                Command::Json => io.send(serde_json::to_string(&game)?)?,
                Command::Quit => break,
            }
        }

        announce(&game);

        Ok(())
    }
}

/// Reports how the game ended, if it did.
fn announce(game: &Game) {
    match (game.state(), game.winner()) {
        (GameState::Checkmate, Some(c)) => info!("checkmate, the {c} player wins"),
        (GameState::Resigned, Some(c)) => info!("the {} player resigned, the {c} player wins", !c),
        (GameState::Stalemate, _) => info!("stalemate, the game is a draw"),
        (state, _) => info!(%state, turn = %game.turn(), "game interrupted"),
    }
}
