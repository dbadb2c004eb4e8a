mod barrier;
mod report;
mod round;
mod settings;

pub use barrier::*;
pub use report::*;
pub use round::*;
pub use settings::*;
