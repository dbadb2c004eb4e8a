mod board;
mod cell;
mod mark;
mod square;

pub use board::*;
pub use cell::*;
pub use mark::*;
pub use square::*;
