use crate::game::{Board, Cell, COLS, ROWS};

/// Render the board as `|`-separated rows with a column-index footer.
/// Empty cells print blank except on the bottom row, where an underscore
/// marks the floor.
pub fn render_board(board: &Board, human_chip: char, computer_chip: char) -> String {
    let mut out = String::new();
    for row in 0..ROWS {
        out.push('|');
        for col in 0..COLS {
            let symbol = match board.chip_at(row as i32, col as i32) {
                Cell::Min => human_chip,
                Cell::Max => computer_chip,
                Cell::Empty if row == ROWS - 1 => '_',
                Cell::Empty => ' ',
            };
            out.push(symbol);
            out.push('|');
        }
        out.push('\n');
    }
    out.push('|');
    for col in 0..COLS {
        out.push_str(&col.to_string());
        out.push('|');
    }
    out.push('\n');
    out
}
