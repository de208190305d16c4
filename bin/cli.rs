use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Two players, one board, taking turns at the terminal.
///
/// Runs `play` unless another applet is named; `moves` lists the legal
/// moves of a single square instead.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level of the diagnostics printed to stderr.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// What to do, `play` by default.
    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let filter = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        // Keeps stdout free for the board and prompts.
        let writer = layer()
            .pretty()
            .without_time()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(stderr);

        registry().with(filter).with(writer).init();

        self.applet.unwrap_or_default().execute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_interface_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_applet_means_play() {
        let cli = Cli::try_parse_from(["cli"]).unwrap();
        assert!(cli.applet.is_none());
    }
}
