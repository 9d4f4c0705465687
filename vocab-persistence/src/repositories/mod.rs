pub mod achievement_repository;
pub mod progress_repository;
pub mod session_repository;
pub mod student_repository;

pub use achievement_repository::AchievementRepository;
pub use progress_repository::ProgressRepository;
pub use session_repository::SessionRepository;
pub use student_repository::StudentRepository;
