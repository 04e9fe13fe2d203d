use gridfall_engine::PieceSeed;

use crate::{command::play::app::PlayApp, tui::Tui};

mod app;
mod screen;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for the piece sequence (32 hex digits); random when omitted
    #[clap(long)]
    seed: Option<PieceSeed>,
    /// Hide the landing preview for the falling piece
    #[clap(long, default_value_t = false)]
    no_ghost: bool,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { seed, no_ghost } = arg;

    let mut app = PlayApp::new(*seed, !no_ghost);
    Tui::new().run(&mut app)
}
