use std::io::{self, BufRead, Write};

/// What one line of move input meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    Column(usize),
    Quit,
}

/// Interpret one line of move input. `None` means the line was not a
/// column number or a quit token and the caller should re-prompt.
/// The quit tokens are exactly "quit" and "q".
pub fn parse_move(line: &str) -> Option<MoveInput> {
    let token = line.trim();
    if token == "quit" || token == "q" {
        return Some(MoveInput::Quit);
    }
    token.parse::<usize>().ok().map(MoveInput::Column)
}

/// Prompt until the player names a currently legal column or quits.
/// Returns `None` on quit (or end of input).
pub fn prompt_move<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    legal: &[usize],
) -> io::Result<Option<usize>> {
    loop {
        write!(output, "Choose your next move (0-6): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse_move(&line) {
            Some(MoveInput::Quit) => return Ok(None),
            Some(MoveInput::Column(col)) if legal.contains(&col) => return Ok(Some(col)),
            _ => continue,
        }
    }
}

/// Ask whether the human wants the first move. Anything other than a
/// yes/no token re-prompts.
pub fn prompt_goes_first<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    loop {
        write!(output, "Would you like to move first? (y/n): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        match line.trim() {
            "yes" | "y" | "Y" => return Ok(true),
            "no" | "n" | "N" => return Ok(false),
            _ => writeln!(output, "Sorry that is not an acceptable answer")?,
        }
    }
}
