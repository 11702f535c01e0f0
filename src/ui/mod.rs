//! Terminal UI: a setup screen for configuring the match and a game view
//! for playing it.

mod app;
mod game_view;
mod setup_view;

pub use app::{App, GameMode};
