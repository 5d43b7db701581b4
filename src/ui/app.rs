use std::io::{self, BufRead, Write};

use crate::ai::MinimaxAgent;
use crate::config::AppConfig;
use crate::game::{GameState, Player};

use super::input::{prompt_goes_first, prompt_move};
use super::render::render_board;

/// Interactive session: alternates minimax moves with prompted human
/// moves until someone wins, the board fills, or the human quits.
///
/// I/O is generic over `BufRead`/`Write` so a whole session can run
/// against scripted input in tests.
pub struct App {
    depth: usize,
    human_chip: char,
    computer_chip: char,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            depth: config.search.depth,
            human_chip: config.display.human_chip,
            computer_chip: config.display.computer_chip,
        }
    }

    /// Play one game to completion.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> io::Result<()> {
        writeln!(
            output,
            "Welcome to connect4. You are {}, the player. {} is the computer opponent",
            self.human_chip, self.computer_chip
        )?;
        writeln!(output, "Type 'quit' or 'q' to exit the game at any time")?;

        let agent = MinimaxAgent::new(self.depth);

        // The root has the human to move when they want the first turn;
        // otherwise the computer opens as MAX.
        let mut state = if prompt_goes_first(input, output)? {
            let root = GameState::initial();
            let Some(col) = prompt_move(input, output, &root.legal_moves())? else {
                writeln!(output, "You quit, loser!")?;
                return Ok(());
            };
            root.apply_move(col).expect("column came from legal_moves")
        } else {
            GameState::new(Player::Max)
        };

        let message = loop {
            // Computer's turn
            let Some(next) = agent.best_child(&state) else {
                break "It's a draw!";
            };
            state = next;
            output.write_all(self.render(&state).as_bytes())?;

            if state.is_terminal() {
                break "Computer wins!";
            }

            if state.board().is_full() {
                break "It's a draw!";
            }

            // Human's turn
            let Some(col) = prompt_move(input, output, &state.legal_moves())? else {
                break "You quit, loser!";
            };
            state = state.apply_move(col).expect("column came from legal_moves");

            if state.is_terminal() {
                // Show the winning board before announcing
                output.write_all(self.render(&state).as_bytes())?;
                break "You win!";
            }
        };

        writeln!(output, "{message}")?;
        Ok(())
    }

    fn render(&self, state: &GameState) -> String {
        render_board(state.board(), self.human_chip, self.computer_chip)
    }
}
