use super::*;
use crate::SIZE;
use crate::Violation;

/// 3x3 grid. Cells only ever go from empty to marked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Board([[Cell; SIZE]; SIZE]);

impl Board {
    pub fn at(&self, square: Square) -> Cell {
        self.0[square.row][square.col]
    }
    pub fn is_occupied(&self, square: Square) -> bool {
        !self.at(square).is_empty()
    }
    pub fn is_full(&self) -> bool {
        Square::all().all(|s| self.is_occupied(s))
    }
    /// Empty squares in row-major order.
    pub fn open(&self) -> Vec<Square> {
        Square::all().filter(|s| !self.is_occupied(*s)).collect()
    }
    pub fn place(&mut self, square: Square, mark: Mark) -> Result<(), Violation> {
        match self.is_occupied(square) {
            true => Err(Violation::Occupied { square }),
            false => Ok(self.0[square.row][square.col] = Cell::from(mark)),
        }
    }
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether `mark` owns the full row, the full column, or either full
    /// diagonal. Both diagonals are scanned on every call, whether or not
    /// `square` lies on them.
    pub fn check_win(&self, square: Square, mark: Mark) -> bool {
        let cell = Cell::from(mark);
        let row = (0..SIZE).all(|i| self.0[square.row][i] == cell);
        let col = (0..SIZE).all(|i| self.0[i][square.col] == cell);
        let diag_a = (0..SIZE).all(|i| self.0[i][i] == cell);
        let diag_b = (0..SIZE).all(|i| self.0[SIZE - 1 - i][i] == cell);
        row || col || diag_a || diag_b
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.0.iter() {
            for cell in row.iter() {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
