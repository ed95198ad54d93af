pub mod formatter;
pub mod parser;
pub mod planning;
pub mod replay;
pub mod scenarios;
mod utils;

pub use planning::solve;
pub use utils::*;

/// Move ceiling enforced by the reference scenarios and the CLI unless overridden.
pub const DEFAULT_MOVE_BUDGET: usize = 200;
