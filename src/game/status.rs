use serde::Serialize;

/// Where a game stands. Won and Draw are absorbing for the round.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub enum Status {
    #[default]
    Playing,
    Won,
    Draw,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Playing)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Status::Playing => "In Progress",
                Status::Won => "Won",
                Status::Draw => "Draw",
            }
        )
    }
}
