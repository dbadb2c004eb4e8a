use serde::Serialize;

/// Per-round tally for one player.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Record {
    pub played: usize,
    pub won: usize,
    pub lost: usize,
    pub drawn: usize,
}

impl Record {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl std::ops::Add for Record {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            played: self.played + rhs.played,
            won: self.won + rhs.won,
            lost: self.lost + rhs.lost,
            drawn: self.drawn + rhs.drawn,
        }
    }
}

impl std::iter::Sum for Record {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |a, b| a + b)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Played {} game(s), Won {}, Lost {}, Draw {}",
            self.played, self.won, self.lost, self.drawn
        )
    }
}
