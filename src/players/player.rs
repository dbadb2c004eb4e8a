use super::*;
use crate::Error;
use crate::PlayerId;
use crate::board::Mark;
use crate::game::Pool;
use crate::game::Slot;
use crate::game::Status;
use crate::random::Random;
use crate::round::RunBarrier;

/// How a game ended from one player's seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Finish {
    /// This player placed the final mark.
    Moved(Status),
    /// The opponent placed it and this player was woken to find out.
    Observed(Status),
}

/// One worker thread's identity, tally and private randomness.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    record: Record,
    mark: Option<Mark>,
    rng: Random,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            record: Record::default(),
            mark: None,
            rng: Random::default(),
        }
    }
    pub fn seeded(id: PlayerId, seed: u64) -> Self {
        Self {
            rng: Random::seeded(0, crate::RAND_MAX, seed),
            ..Self::new(id)
        }
    }
    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn record(&self) -> Record {
        self.record
    }
    /// Role in the game currently being played, if any.
    pub fn mark(&self) -> Option<Mark> {
        self.mark
    }
    pub fn reset(&mut self) {
        self.record = Record::default();
        self.mark = None;
    }
}

impl Player {
    /// Whole life of a player in one round: register, wait for the gun,
    /// play every game that still has a seat, deregister. Any failure faults
    /// the entire pool so no partner is left waiting forever.
    pub fn run(&mut self, pool: &Pool, barrier: &RunBarrier) -> Result<(), Error> {
        log::debug!("Player {} waiting on starting gun", self.id);
        let _registration = barrier.register_and_await()?;
        log::debug!("Player {} running", self.id);
        self.scan(pool).inspect_err(|e| {
            log::error!("Player {}: {}", self.id, e);
            pool.abort();
        })
    }

    fn scan(&mut self, pool: &Pool) -> Result<(), Error> {
        let mut next = 0;
        while let Some((i, slot)) = pool.claim_next(next)? {
            self.play(slot)?;
            next = i + 1;
        }
        Ok(())
    }

    /// Join `slot` and play it to the end, then tally the result.
    pub fn play(&mut self, slot: &Slot) -> Result<Status, Error> {
        let (mut table, mark) = slot.join(self.id)?;
        self.mark = Some(mark);
        log::info!(
            "Game {}: Player {} vs Player {} (Player {}) starting",
            slot.game(),
            table.x().map_or(-1, |x| x as i64),
            table.o().map_or(-1, |o| o as i64),
            self.id
        );
        let finish = loop {
            table = slot.await_turn(table, mark)?;
            if table.status().is_terminal() {
                break Finish::Observed(table.status());
            }
            let status = table.play(self.id, mark, &mut self.rng)?;
            log::info!("Game {}:\n{}", slot.game(), table.board());
            slot.notify();
            if status.is_terminal() {
                break Finish::Moved(status);
            }
        };
        drop(table);
        self.tally(slot, finish);
        self.mark = None;
        match finish {
            Finish::Moved(status) | Finish::Observed(status) => Ok(status),
        }
    }

    fn tally(&mut self, slot: &Slot, finish: Finish) {
        self.record.played += 1;
        match finish {
            Finish::Moved(Status::Won) => {
                log::info!("Game {}: Player {} - Won", slot.game(), self.id);
                self.record.won += 1;
            }
            Finish::Observed(Status::Won) => {
                log::info!("Game {}: Player {} - Lost", slot.game(), self.id);
                self.record.lost += 1;
            }
            Finish::Moved(Status::Draw) | Finish::Observed(Status::Draw) => {
                log::info!("Game {}: Player {} - Draw", slot.game(), self.id);
                self.record.drawn += 1;
            }
            Finish::Moved(Status::Playing) | Finish::Observed(Status::Playing) => {
                unreachable!("game loop only exits on a terminal status")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Violation;
    use std::sync::Arc;

    #[test]
    fn pair_plays_one_game() {
        let slot = Arc::new(Slot::new(1));
        let handles = (0..2)
            .map(|id| {
                let slot = slot.clone();
                std::thread::spawn(move || {
                    let mut player = Player::seeded(id, id as u64);
                    assert!(slot.try_claim().unwrap());
                    let status = player.play(&slot).unwrap();
                    assert_eq!(player.mark(), None);
                    (status, player.record())
                })
            })
            .collect::<Vec<_>>();
        let results = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(results[0].0, results[1].0);
        let total = results.iter().map(|(_, r)| *r).sum::<Record>();
        assert_eq!(total.played, 2);
        match results[0].0 {
            Status::Won => assert_eq!((total.won, total.lost, total.drawn), (1, 1, 0)),
            Status::Draw => assert_eq!((total.won, total.lost, total.drawn), (0, 0, 2)),
            Status::Playing => unreachable!(),
        }
    }

    #[test]
    fn aborted_game_is_reported_not_tallied() {
        let slot = Slot::new(5);
        slot.abort();
        let mut player = Player::new(0);
        assert!(matches!(
            player.play(&slot),
            Err(Error::Violation(Violation::Aborted { game: 5 }))
        ));
        assert!(player.record().is_zero());
    }

    #[test]
    fn reset_zeroes_record() {
        let mut player = Player::new(3);
        player.record.won = 2;
        player.record.played = 2;
        player.reset();
        assert!(player.record().is_zero());
        assert_eq!(player.id(), 3);
    }
}
