use super::*;
use crate::Error;

/// Fixed set of games shared by every player in a round. Claims are
/// arbitrated per slot; nothing serializes claims across different slots.
#[derive(Debug)]
pub struct Pool {
    slots: Vec<Slot>,
}

impl Pool {
    pub fn new(games: usize) -> Self {
        Self {
            slots: (1..=games).map(Slot::new).collect(),
        }
    }
    pub fn len(&self) -> usize {
        self.slots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Try each slot from `from` upward and return the first one claimed,
    /// with its index. Every slot passed over was full.
    pub fn claim_next(&self, from: usize) -> Result<Option<(usize, &Slot)>, Error> {
        for (i, slot) in self.slots.iter().enumerate().skip(from) {
            if slot.try_claim()? {
                log::debug!("claimed seat in game {}", slot.game());
                return Ok(Some((i, slot)));
            }
        }
        Ok(None)
    }

    /// Fault every game so no player stays parked waiting on a partner or turn.
    pub fn abort(&self) {
        self.slots.iter().for_each(Slot::abort);
    }

    pub fn reset(&self) -> Result<(), Error> {
        self.slots.iter().try_for_each(Slot::reset)
    }

    pub fn snapshot(&self) -> Result<Vec<Table>, Error> {
        self.slots.iter().map(Slot::snapshot).collect()
    }
}
