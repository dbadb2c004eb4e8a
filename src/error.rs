use crate::GameId;
use crate::PlayerId;
use crate::board::Square;

/// Broken coordination invariants. None of these are recoverable; a round
/// that observes one is aborted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A game reached play with only one seat assigned.
    MissingPartner { game: GameId },
    /// A player was handed control while the turn belonged to its opponent.
    WrongTurn { game: GameId, player: PlayerId },
    /// A third player tried to sit at a full table.
    Overbooked { game: GameId },
    /// A mark was placed on a cell that already held one.
    Occupied { square: Square },
    /// The opponent in this game faulted; the game cannot finish.
    Aborted { game: GameId },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPartner { game } => {
                write!(f, "game {} played with only one player present", game)
            }
            Self::WrongTurn { game, player } => {
                write!(f, "game {}: player {} moved out of turn", game, player)
            }
            Self::Overbooked { game } => write!(f, "game {} already has two players", game),
            Self::Occupied { square } => write!(f, "cell {} is already marked", square),
            Self::Aborted { game } => write!(f, "game {} aborted by its partner", game),
        }
    }
}

/// Everything a round or its configuration can fail with.
#[derive(Debug)]
pub enum Error {
    /// Rejected settings; reported to the user, nothing was started.
    Config(String),
    Violation(Violation),
    /// A lock was poisoned by a player thread that panicked while holding it.
    Poisoned,
    Panicked(PlayerId),
    Spawn(std::io::Error),
}

impl Error {
    /// Whether this error means the coordination logic itself failed.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(s) => write!(f, "{}", s),
            Self::Violation(v) => write!(f, "protocol violation: {}", v),
            Self::Poisoned => write!(f, "lock poisoned by a panicked player"),
            Self::Panicked(id) => write!(f, "player {} panicked", id),
            Self::Spawn(e) => write!(f, "failed to spawn player thread: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Violation> for Error {
    fn from(v: Violation) -> Self {
        Self::Violation(v)
    }
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Self::Poisoned
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Spawn(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_not_fatal() {
        assert!(!Error::Config("nope".into()).is_fatal());
        assert!(Error::from(Violation::MissingPartner { game: 1 }).is_fatal());
        assert!(Error::Poisoned.is_fatal());
    }

    #[test]
    fn violation_message() {
        let e = Error::from(Violation::WrongTurn { game: 3, player: 7 });
        assert_eq!(
            e.to_string(),
            "protocol violation: game 3: player 7 moved out of turn"
        );
    }
}
