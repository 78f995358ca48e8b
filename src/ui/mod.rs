//! Terminal UI: column selection, move feedback, and board rendering for
//! any preset size.

mod app;
mod game_view;

pub use app::App;
