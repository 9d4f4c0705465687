pub mod prelude;

pub mod achievements;
pub mod practice_sessions;
pub mod students;
pub mod word_progress;
