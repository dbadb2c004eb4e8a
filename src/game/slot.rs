use super::*;
use crate::Error;
use crate::GameId;
use crate::PlayerId;
use crate::SEATS;
use crate::Violation;
use crate::board::Mark;
use std::sync::Condvar;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

/// One game in the pool. Occupancy sits behind its own claim lock; the rest
/// of the game state sits behind the table lock, and the condition variable
/// carries both the partner-arrived and turn-changed signals.
#[derive(Debug)]
pub struct Slot {
    game: GameId,
    seats: Mutex<usize>,
    table: Mutex<Table>,
    signal: Condvar,
}

impl Slot {
    pub fn new(game: GameId) -> Self {
        Self {
            game,
            seats: Mutex::new(0),
            table: Mutex::new(Table::new(game)),
            signal: Condvar::new(),
        }
    }
    pub fn game(&self) -> GameId {
        self.game
    }
    pub fn occupancy(&self) -> Result<usize, Error> {
        Ok(*self.seats.lock()?)
    }
    /// Copy of the current game state.
    pub fn snapshot(&self) -> Result<Table, Error> {
        Ok(self.table.lock()?.clone())
    }

    /// Take one of the two seats if any is left.
    pub fn try_claim(&self) -> Result<bool, Error> {
        let mut seats = self.seats.lock()?;
        match *seats < SEATS {
            true => {
                *seats += 1;
                Ok(true)
            }
            false => Ok(false),
        }
    }

    /// Sit down at the table. The first to arrive takes O and waits for a
    /// partner; the second takes X, wakes the first, and proceeds without
    /// waiting. The returned guard keeps the table locked.
    pub fn join(&self, player: PlayerId) -> Result<(MutexGuard<'_, Table>, Mark), Error> {
        let mut table = self.table.lock()?;
        let mark = table.seat(player)?;
        log::debug!(
            "Player {} joining game {} as '{}'",
            player,
            self.game,
            mark
        );
        let table = match mark {
            Mark::O => self
                .signal
                .wait_while(table, |t| t.x().is_none() && !t.is_faulted())?,
            Mark::X => {
                self.signal.notify_all();
                table
            }
        };
        match table.is_faulted() {
            true => Err(Violation::Aborted { game: self.game }.into()),
            false => Ok((table, mark)),
        }
    }

    /// Suspend until it is `mark`'s turn or the game has ended. Wakeups that
    /// arrive while the opponent still holds the turn go back to sleep.
    pub fn await_turn<'a>(
        &'a self,
        table: MutexGuard<'a, Table>,
        mark: Mark,
    ) -> Result<MutexGuard<'a, Table>, Error> {
        let table = self.signal.wait_while(table, |t| {
            !t.is_faulted() && !t.status().is_terminal() && t.turn() != mark
        })?;
        match table.is_faulted() {
            true => Err(Violation::Aborted { game: self.game }.into()),
            false => Ok(table),
        }
    }

    /// Wake everyone waiting on this game.
    pub fn notify(&self) {
        self.signal.notify_all();
    }

    /// Mark the game as unfinishable and wake anyone waiting on it.
    pub fn abort(&self) {
        self.table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .fault();
        self.signal.notify_all();
    }

    pub fn reset(&self) -> Result<(), Error> {
        *self.seats.lock()? = 0;
        self.table.lock()?.reset();
        Ok(())
    }
}
