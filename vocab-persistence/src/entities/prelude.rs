pub use super::achievements::Entity as Achievements;
pub use super::practice_sessions::Entity as PracticeSessions;
pub use super::students::Entity as Students;
pub use super::word_progress::Entity as WordProgressRecords;
