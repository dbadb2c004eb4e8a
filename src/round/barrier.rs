use crate::Error;
use std::sync::Condvar;
use std::sync::Mutex;
use std::sync::PoisonError;

#[derive(Debug, Default)]
struct Gate {
    registered: usize,
    active: usize,
    released: bool,
}

/// Starting gun and finish line for one round. Players register and park
/// until the coordinator fires; the coordinator then waits for every
/// registration to be dropped.
#[derive(Debug, Default)]
pub struct RunBarrier {
    gate: Mutex<Gate>,
    /// Coordinator side: a player registered or finished.
    counted: Condvar,
    /// Player side: the gun fired.
    fired: Condvar,
}

/// Proof of registration. Dropping it deregisters, including on unwind.
#[must_use]
#[derive(Debug)]
pub struct Registration<'a>(&'a RunBarrier);

impl Drop for Registration<'_> {
    fn drop(&mut self) {
        self.0.finish();
    }
}

impl RunBarrier {
    /// Register, tell the coordinator, and block until released.
    pub fn register_and_await(&self) -> Result<Registration<'_>, Error> {
        {
            let mut gate = self.gate.lock()?;
            gate.registered += 1;
            gate.active += 1;
        }
        let registration = Registration(self);
        self.counted.notify_all();
        let _gate = self.fired.wait_while(self.gate.lock()?, |g| !g.released)?;
        Ok(registration)
    }

    /// Fire the gun for every parked player.
    pub fn release_all(&self) -> Result<(), Error> {
        self.gate.lock()?.released = true;
        self.fired.notify_all();
        log::debug!("starting gun fired");
        Ok(())
    }

    /// Block until at least `expected` players have registered.
    pub fn await_registered(&self, expected: usize) -> Result<(), Error> {
        let _gate = self
            .counted
            .wait_while(self.gate.lock()?, |g| g.registered < expected)?;
        Ok(())
    }

    /// Block until every registered player has deregistered.
    pub fn await_finished(&self) -> Result<(), Error> {
        let _gate = self.counted.wait_while(self.gate.lock()?, |g| g.active > 0)?;
        Ok(())
    }

    pub fn is_released(&self) -> Result<bool, Error> {
        Ok(self.gate.lock()?.released)
    }
    pub fn active(&self) -> Result<usize, Error> {
        Ok(self.gate.lock()?.active)
    }

    /// Clear both counters and the gun for reuse.
    pub fn reset(&self) -> Result<(), Error> {
        *self.gate.lock()? = Gate::default();
        Ok(())
    }

    fn finish(&self) {
        let mut gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        gate.active -= 1;
        if gate.active == 0 {
            self.counted.notify_all();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    #[test]
    fn nobody_starts_before_the_gun() {
        let barrier = Arc::new(RunBarrier::default());
        let started = Arc::new(AtomicUsize::new(0));
        let handles = (0..6)
            .map(|_| {
                let barrier = barrier.clone();
                let started = started.clone();
                std::thread::spawn(move || {
                    let _r = barrier.register_and_await().unwrap();
                    started.fetch_add(1, Ordering::SeqCst);
                })
            })
            .collect::<Vec<_>>();
        barrier.await_registered(6).unwrap();
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(started.load(Ordering::SeqCst), 0);
        assert!(!barrier.is_released().unwrap());
        barrier.release_all().unwrap();
        barrier.await_finished().unwrap();
        assert_eq!(started.load(Ordering::SeqCst), 6);
        handles.into_iter().for_each(|h| h.join().unwrap());
    }

    #[test]
    fn finished_waits_for_slowest_player() {
        let barrier = Arc::new(RunBarrier::default());
        let done = Arc::new(AtomicUsize::new(0));
        let handles = (0..4)
            .map(|i| {
                let barrier = barrier.clone();
                let done = done.clone();
                std::thread::spawn(move || {
                    let _r = barrier.register_and_await().unwrap();
                    std::thread::sleep(Duration::from_millis(10 * i));
                    done.fetch_add(1, Ordering::SeqCst);
                })
            })
            .collect::<Vec<_>>();
        barrier.await_registered(4).unwrap();
        barrier.release_all().unwrap();
        barrier.await_finished().unwrap();
        assert_eq!(done.load(Ordering::SeqCst), 4);
        assert_eq!(barrier.active().unwrap(), 0);
        handles.into_iter().for_each(|h| h.join().unwrap());
    }

    #[test]
    fn panicking_player_still_deregisters() {
        let barrier = Arc::new(RunBarrier::default());
        let handle = {
            let barrier = barrier.clone();
            std::thread::spawn(move || {
                let _r = barrier.register_and_await().unwrap();
                panic!("boom");
            })
        };
        barrier.await_registered(1).unwrap();
        barrier.release_all().unwrap();
        barrier.await_finished().unwrap();
        assert!(handle.join().is_err());
    }

    #[test]
    fn reset_clears_gun_and_counts() {
        let barrier = RunBarrier::default();
        barrier.release_all().unwrap();
        drop(barrier.register_and_await().unwrap());
        barrier.reset().unwrap();
        assert!(!barrier.is_released().unwrap());
        assert_eq!(barrier.active().unwrap(), 0);
    }
}
