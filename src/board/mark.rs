use serde::Serialize;

/// A player's role within one game. X always moves first.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub enum Mark {
    #[default]
    X,
    O,
}

impl Mark {
    pub fn other(&self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Mark::X => "X",
                Mark::O => "O",
            }
        )
    }
}
