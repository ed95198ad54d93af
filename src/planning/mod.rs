pub mod depth;
pub mod moves;
pub mod planner;
pub mod stacks;

pub use depth::Depth;
pub use moves::Move;
pub use planner::{locked_height, solve, target_order, PlanSummary, Planner};
pub use stacks::{StackId, Stacks};
