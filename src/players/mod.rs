mod player;
mod record;

pub use player::*;
pub use record::*;
