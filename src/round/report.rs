use crate::GameId;
use crate::PlayerId;
use crate::game::Status;
use crate::game::Table;
use crate::players::Player;
use crate::players::Record;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerLine {
    pub id: PlayerId,
    pub record: Record,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameLine {
    pub game: GameId,
    pub x: Option<PlayerId>,
    pub o: Option<PlayerId>,
    pub status: Status,
    pub winner: Option<PlayerId>,
    pub moves: usize,
}

impl From<&Table> for GameLine {
    fn from(table: &Table) -> Self {
        Self {
            game: table.game(),
            x: table.x(),
            o: table.o(),
            status: table.status(),
            winner: table.winner(),
            moves: table.history().len(),
        }
    }
}

/// Final tallies of a round, per player and per game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub round: usize,
    pub players: Vec<PlayerLine>,
    pub games: Vec<GameLine>,
}

impl Report {
    pub fn new(round: usize, players: &[Player], tables: &[Table]) -> Self {
        Self {
            round,
            players: players
                .iter()
                .map(|p| PlayerLine {
                    id: p.id(),
                    record: p.record(),
                })
                .collect(),
            games: tables.iter().map(GameLine::from).collect(),
        }
    }
    pub fn totals(&self) -> Record {
        self.players.iter().map(|p| p.record).sum()
    }
    pub fn games_won(&self) -> usize {
        self.games.iter().filter(|g| g.status == Status::Won).count()
    }
    pub fn games_drawn(&self) -> usize {
        self.games.iter().filter(|g| g.status == Status::Draw).count()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let seat = |id: Option<PlayerId>| id.map_or(-1, |id| id as i64);
        let totals = self.totals();
        writeln!(f, "********* Player Results **********")?;
        for line in self.players.iter() {
            writeln!(f, "Player {}, {}", line.id, line.record)?;
        }
        writeln!(
            f,
            "Total Players {}, Wins {}, Losses {}, Draws {}\n\n",
            self.players.len(),
            totals.won,
            totals.lost,
            totals.drawn / 2
        )?;
        writeln!(f, "********* Game Results **********")?;
        for line in self.games.iter() {
            writeln!(
                f,
                "Game {} - 'X' player {}, 'O' player {}, game result {}",
                line.game,
                seat(line.x),
                seat(line.o),
                line.status
            )?;
        }
        writeln!(
            f,
            "Total Games = {}, {} Games Won, {} Games were a Draw",
            self.games.len(),
            self.games_won(),
            self.games_drawn()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Report {
        Report {
            round: 1,
            players: vec![
                PlayerLine {
                    id: 0,
                    record: Record {
                        played: 2,
                        won: 1,
                        lost: 0,
                        drawn: 1,
                    },
                },
                PlayerLine {
                    id: 1,
                    record: Record {
                        played: 2,
                        won: 0,
                        lost: 1,
                        drawn: 1,
                    },
                },
            ],
            games: vec![
                GameLine {
                    game: 1,
                    x: Some(1),
                    o: Some(0),
                    status: Status::Won,
                    winner: Some(0),
                    moves: 6,
                },
                GameLine {
                    game: 2,
                    x: Some(0),
                    o: Some(1),
                    status: Status::Draw,
                    winner: None,
                    moves: 9,
                },
            ],
        }
    }

    #[test]
    fn totals_halve_draws() {
        let report = report();
        let text = report.to_string();
        assert!(text.contains("Player 0, Played 2 game(s), Won 1, Lost 0, Draw 1"));
        assert!(text.contains("Total Players 2, Wins 1, Losses 1, Draws 1"));
        assert!(text.contains("Game 1 - 'X' player 1, 'O' player 0, game result Won"));
        assert!(text.contains("Total Games = 2, 1 Games Won, 1 Games were a Draw"));
    }

    #[test]
    fn unseated_players_print_as_minus_one() {
        let mut report = report();
        report.games[0].x = None;
        assert!(report.to_string().contains("'X' player -1"));
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["games"][0]["winner"], 0);
        assert_eq!(json["games"][1]["status"], "Draw");
        assert_eq!(json["players"][1]["record"]["lost"], 1);
    }
}
