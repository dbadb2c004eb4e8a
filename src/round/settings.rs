use crate::Error;

/// Validated size of a round. Only constructible through [`Settings::new`],
/// so an accepted value always has at least two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    players: usize,
    games: usize,
    seed: Option<u64>,
}

impl Settings {
    /// Counts arrive signed, as typed, so negative input can be rejected
    /// rather than wrapped.
    pub fn new(players: i64, games: i64) -> Result<Self, Error> {
        Self::check_players(players)?;
        if games < 0 {
            return Err(Error::Config(
                "All arguments must be positive integer values.".into(),
            ));
        }
        Ok(Self {
            players: players as usize,
            games: games as usize,
            seed: None,
        })
    }
    /// Reject a player count on its own, before asking for anything else.
    pub fn check_players(players: i64) -> Result<(), Error> {
        match players < 2 {
            true => Err(Error::Config("Requires at least two players.".into())),
            false => Ok(()),
        }
    }
    /// Player `i` draws from a generator seeded with `seed + i`.
    pub fn with_seed(self, seed: Option<u64>) -> Self {
        Self { seed, ..self }
    }
    pub fn players(&self) -> usize {
        self.players
    }
    pub fn games(&self) -> usize {
        self.games
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl std::fmt::Display for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} player(s) for {} game(s)", self.players, self.games)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_lonely_player() {
        assert!(matches!(Settings::new(1, 3), Err(Error::Config(_))));
        assert!(matches!(Settings::new(-4, 3), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_negative_games() {
        assert!(matches!(Settings::new(2, -1), Err(Error::Config(_))));
    }

    #[test]
    fn accepts_zero_games() {
        let settings = Settings::new(2, 0).unwrap();
        assert_eq!((settings.players(), settings.games()), (2, 0));
        assert_eq!(settings.seed(), None);
        assert_eq!(settings.with_seed(Some(9)).seed(), Some(9));
    }
}
