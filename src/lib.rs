//! Concurrent random-play tic-tac-toe.
//!
//! A round launches one thread per player. Every player waits on a shared
//! starting gun, then walks the pool of games in order, claiming any seat
//! left open and playing that game to completion against whichever player
//! claimed the other seat. Turn handoff inside a game is a condition
//! variable guarded by the game's own lock.
pub mod board;
pub mod error;
pub mod game;
pub mod players;
pub mod random;
pub mod round;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Zero-based player identifier, stable across rounds.
pub type PlayerId = usize;
/// One-based game number within the pool.
pub type GameId = usize;

// ============================================================================
// BOARD PARAMETERS
// ============================================================================
/// Side length of the board.
pub const SIZE: usize = 3;
/// Total cells on the board.
pub const CELLS: usize = SIZE * SIZE;
/// Seats per game.
pub const SEATS: usize = 2;
/// Upper bound of each player's random draw (mirrors a C `RAND_MAX`).
pub const RAND_MAX: u32 = i32::MAX as u32;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at `level`, and optionally a timestamped
/// DEBUG log under `logs/`. Each record is written whole, so concurrent
/// players never interleave partial lines.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, file: bool) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];
    if file {
        std::fs::create_dir_all("logs")?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs();
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            std::fs::File::create(format!("logs/{}.log", time))?,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}

/// Block until the user presses enter.
#[cfg(feature = "cli")]
pub fn pause() {
    println!("Press Enter to continue");
    if let Err(e) = enter(&mut std::io::stdin().lock()) {
        log::warn!("could not read from stdin: {}", e);
    }
}

/// Consume one line from `reader`.
#[cfg(feature = "cli")]
fn enter<R: std::io::BufRead>(reader: &mut R) -> std::io::Result<()> {
    let ref mut buffer = String::new();
    reader.read_line(buffer).map(|_| ())
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::BufRead;
    use std::io::Read;

    struct Broken;
    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }
    }
    impl BufRead for Broken {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            Err(std::io::Error::other("closed"))
        }
        fn consume(&mut self, _: usize) {}
    }

    #[test]
    fn enter_consumes_one_line() {
        let mut input = std::io::Cursor::new("\nrest\n");
        enter(&mut input).unwrap();
        assert_eq!(input.position(), 1);
    }

    #[test]
    fn enter_surfaces_read_errors() {
        assert_eq!(
            enter(&mut Broken).unwrap_err().kind(),
            std::io::ErrorKind::Other
        );
    }
}
