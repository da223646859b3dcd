//! This crate contains the source code for the binary of the labyrinth escape viewer.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use labyrinth_escape::{init_logging, App, Config};

fn main() -> Result<()> {
    install()?;
    init_logging()?;

    let config = Config::parse();
    let mut app = App::new(&config.path)?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result
}
