pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// The four direction families a run can lie along, as `(d_row, d_col)`
/// steps. Each axis is scanned in both directions.
pub const HORIZONTAL: (i32, i32) = (0, 1);
pub const VERTICAL: (i32, i32) = (1, 0);
/// Top-left to bottom-right, `\`.
pub const DIAGONAL_DOWN: (i32, i32) = (1, 1);
/// Bottom-left to top-right, `/`.
pub const DIAGONAL_UP: (i32, i32) = (-1, 1);

pub const AXES: [(i32, i32); 4] = [HORIZONTAL, VERTICAL, DIAGONAL_DOWN, DIAGONAL_UP];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    /// A chip belonging to the maximizing player (the computer).
    Max,
    /// A chip belonging to the minimizing player (the human).
    Min,
}

impl Cell {
    /// The opposite chip color. Used by the heuristic's inverse scans;
    /// `Empty` has no opposite and maps to itself.
    pub fn opposite(self) -> Cell {
        match self {
            Cell::Max => Cell::Min,
            Cell::Min => Cell::Max,
            Cell::Empty => Cell::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

/// A 7x6 grid of chips. Row 0 is the top, row 5 the bottom; chips obey
/// gravity, so a cell below an occupied cell in the same column is never
/// empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Chip at a coordinate, `Empty` for anything out of bounds. Taking
    /// signed coordinates lets directional scans walk off the edge of the
    /// board without separate bounds checks.
    pub fn chip_at(&self, row: i32, col: i32) -> Cell {
        if (0..ROWS as i32).contains(&row) && (0..COLS as i32).contains(&col) {
            self.cells[row as usize][col as usize]
        } else {
            Cell::Empty
        }
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a chip into a column; it lands in the lowest empty row and its
    /// final coordinate is returned. Mutates this board in place — copy
    /// first if the previous state must survive.
    pub fn drop_chip(&mut self, col: usize, cell: Cell) -> Result<(usize, usize), MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok((row, col));
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Columns that can still accept a chip, in ascending order. An empty
    /// result means the board is completely full.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Length of the run of `cell`-colored chips through `(row, col)` along
    /// `axis`, counting the origin cell itself and walking outward both ways
    /// until a mismatch or the board edge.
    pub fn run_length(&self, row: usize, col: usize, axis: (i32, i32), cell: Cell) -> usize {
        let (dr, dc) = axis;
        let forward = self.count_toward(row as i32, col as i32, dr, dc, cell);
        let backward = self.count_toward(row as i32, col as i32, -dr, -dc, cell);
        forward + backward + 1
    }

    /// Consecutive `cell`-colored chips strictly beyond `(row, col)` in the
    /// direction `(dr, dc)`. `Empty` is not a countable target; it would
    /// match past the board edge.
    pub fn count_toward(&self, row: i32, col: i32, dr: i32, dc: i32, cell: Cell) -> usize {
        if cell == Cell::Empty {
            return 0;
        }
        let mut count = 0;
        let mut r = row + dr;
        let mut c = col + dc;
        while self.chip_at(r, c) == cell {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
