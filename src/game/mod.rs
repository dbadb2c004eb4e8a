mod ply;
mod pool;
mod slot;
mod status;
mod table;

pub use ply::*;
pub use pool::*;
pub use slot::*;
pub use status::*;
pub use table::*;
