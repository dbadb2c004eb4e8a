use crate::PlayerId;
use crate::board::Mark;
use crate::board::Square;
use serde::Serialize;

/// One placed mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ply {
    pub player: PlayerId,
    pub mark: Mark,
    pub square: Square,
}

impl std::fmt::Display for Ply {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Player {}: Picked {}", self.player, self.square)
    }
}
