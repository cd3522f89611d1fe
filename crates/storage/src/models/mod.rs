mod movement;
mod nutrition;
mod session;
mod set_entry;
mod weight_entry;

pub use movement::Movement;
pub use nutrition::{NutritionEntry, NutritionGoal};
pub use session::WorkoutSession;
pub use set_entry::SetEntry;
pub use weight_entry::WeightEntry;
