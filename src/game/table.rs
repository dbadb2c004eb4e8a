use super::*;
use crate::GameId;
use crate::PlayerId;
use crate::Violation;
use crate::board::Board;
use crate::board::Mark;
use crate::random::Random;

/// Mutable state of one game, only ever touched under its slot's lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    game: GameId,
    board: Board,
    turn: Mark,
    status: Status,
    x: Option<PlayerId>,
    o: Option<PlayerId>,
    history: Vec<Ply>,
    faulted: bool,
}

impl Table {
    pub fn new(game: GameId) -> Self {
        Self {
            game,
            board: Board::default(),
            turn: Mark::X,
            status: Status::Playing,
            x: None,
            o: None,
            history: Vec::with_capacity(crate::CELLS),
            faulted: false,
        }
    }
    pub fn game(&self) -> GameId {
        self.game
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn turn(&self) -> Mark {
        self.turn
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn x(&self) -> Option<PlayerId> {
        self.x
    }
    pub fn o(&self) -> Option<PlayerId> {
        self.o
    }
    pub fn history(&self) -> &[Ply] {
        &self.history
    }
    pub fn is_faulted(&self) -> bool {
        self.faulted
    }
    pub fn is_paired(&self) -> bool {
        self.x.is_some() && self.o.is_some()
    }
    /// Player who placed the winning mark, if the game was won.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            Status::Won => self.history.last().map(|ply| ply.player),
            _ => None,
        }
    }

    /// First to sit takes O, second takes X. Nobody sits a third time.
    pub fn seat(&mut self, player: PlayerId) -> Result<Mark, Violation> {
        match (self.o, self.x) {
            (None, _) => {
                self.o = Some(player);
                Ok(Mark::O)
            }
            (Some(_), None) => {
                self.x = Some(player);
                Ok(Mark::X)
            }
            (Some(_), Some(_)) => Err(Violation::Overbooked { game: self.game }),
        }
    }

    /// Place `mark` on a uniformly random open cell. Turn ownership passes to
    /// the opponent before the outcome of the move is evaluated.
    pub fn play(
        &mut self,
        player: PlayerId,
        mark: Mark,
        rng: &mut Random,
    ) -> Result<Status, Violation> {
        if !self.is_paired() {
            return Err(Violation::MissingPartner { game: self.game });
        }
        if self.turn != mark {
            return Err(Violation::WrongTurn {
                game: self.game,
                player,
            });
        }
        self.turn = mark.other();
        let open = self.board.open();
        if open.is_empty() {
            self.status = Status::Draw;
            return Ok(self.status);
        }
        let square = open[rng.pick(open.len())];
        self.board.place(square, mark)?;
        let ply = Ply {
            player,
            mark,
            square,
        };
        log::info!("Game {}: {}", self.game, ply);
        self.history.push(ply);
        self.status = match (self.board.check_win(square, mark), self.board.is_full()) {
            (true, _) => Status::Won,
            (false, true) => Status::Draw,
            (false, false) => Status::Playing,
        };
        Ok(self.status)
    }

    pub fn fault(&mut self) {
        self.faulted = true;
    }
    pub fn reset(&mut self) {
        *self = Self::new(self.game);
    }
}
