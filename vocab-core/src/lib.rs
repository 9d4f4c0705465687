pub mod scheduler;
pub mod progress;
pub mod achievements;
pub mod leveling;

// Re-export main components
pub use scheduler::*;
pub use progress::*;
pub use achievements::*;
pub use leveling::*;
