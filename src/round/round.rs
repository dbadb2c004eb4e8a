use super::*;
use crate::Error;
use crate::PlayerId;
use crate::Violation;
use crate::game::Pool;
use crate::players::Player;
use std::thread::Builder;
use std::thread::ScopedJoinHandle;

/// Coordinator for repeated rounds over one pool of games and one set of
/// players. Each round gets a fresh starting gun; pool and players are
/// reset between rounds.
#[derive(Debug)]
pub struct Round {
    settings: Settings,
    pool: Pool,
    players: Vec<Player>,
    played: usize,
}

impl Round {
    pub fn new(settings: Settings) -> Self {
        Self {
            pool: Pool::new(settings.games()),
            players: (0..settings.players())
                .map(|id| match settings.seed() {
                    Some(seed) => Player::seeded(id, seed.wrapping_add(id as u64)),
                    None => Player::new(id),
                })
                .collect(),
            played: 0,
            settings,
        }
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn pool(&self) -> &Pool {
        &self.pool
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Run one round to completion: spawn a thread per player, wait for all
    /// of them to register, fire the gun, wait for all of them to finish.
    pub fn play(&mut self) -> Result<Report, Error> {
        self.played += 1;
        log::info!("round {} starting {}", self.played, self.settings);
        let barrier = RunBarrier::default();
        let pool = &self.pool;
        let gun = &barrier;
        let outcome = std::thread::scope(|scope| {
            let mut handles = Vec::with_capacity(self.players.len());
            let mut spawned = Ok(());
            for player in self.players.iter_mut() {
                let id = player.id();
                match Builder::new()
                    .name(format!("player-{}", id))
                    .spawn_scoped(scope, move || player.run(pool, gun))
                {
                    Ok(handle) => handles.push((id, handle)),
                    Err(e) => {
                        spawned = Err(Error::from(e));
                        break;
                    }
                }
            }
            let coordinated = spawned.and_then(|_| Self::coordinate(gun, handles.len()));
            if coordinated.is_err() {
                pool.abort();
                gun.release_all().ok();
            }
            Self::collect(coordinated, handles)
        });
        outcome.inspect_err(|e| log::error!("round {} aborted: {}", self.played, e))?;
        Ok(Report::new(self.played, &self.players, &self.pool.snapshot()?))
    }

    /// Zero every player's record and reopen every game.
    pub fn reset(&mut self) -> Result<(), Error> {
        self.players.iter_mut().for_each(Player::reset);
        self.pool.reset()
    }

    fn coordinate(barrier: &RunBarrier, expected: usize) -> Result<(), Error> {
        barrier.await_registered(expected)?;
        barrier.release_all()?;
        barrier.await_finished()?;
        log::debug!("all {} players finished", expected);
        Ok(())
    }

    /// Join every player thread, then surface the most informative failure:
    /// a partner's abort is only a consequence, so any other error wins.
    fn collect(
        coordinated: Result<(), Error>,
        handles: Vec<(PlayerId, ScopedJoinHandle<'_, Result<(), Error>>)>,
    ) -> Result<(), Error> {
        let mut errors = handles
            .into_iter()
            .map(|(id, handle)| handle.join().unwrap_or(Err(Error::Panicked(id))))
            .filter_map(Result::err)
            .collect::<Vec<_>>();
        coordinated?;
        match errors
            .iter()
            .position(|e| !matches!(e, Error::Violation(Violation::Aborted { .. })))
        {
            Some(i) => Err(errors.swap_remove(i)),
            None => errors.pop().map_or(Ok(()), Err),
        }
    }
}
