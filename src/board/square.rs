use crate::SIZE;
use serde::Serialize;

/// Board coordinate.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < SIZE && col < SIZE);
        Self { row, col }
    }
    /// Row-major iteration over every square.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..crate::CELLS).map(Self::from)
    }
}

impl From<usize> for Square {
    fn from(n: usize) -> Self {
        Self::new(n / SIZE, n % SIZE)
    }
}
impl From<Square> for usize {
    fn from(s: Square) -> usize {
        s.row * SIZE + s.col
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[Row: {}, Col: {}]", self.row, self.col)
    }
}
