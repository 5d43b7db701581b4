//! Terminal front end: prompts, board rendering, and the game loop.

mod app;
mod input;
mod render;

pub use app::App;
pub use input::{parse_move, prompt_goes_first, prompt_move, MoveInput};
pub use render::render_board;
