pub mod progress;
pub mod session;
pub mod achievement;
pub mod student;
pub mod errors;

// Re-export all types
pub use progress::*;
pub use session::*;
pub use achievement::*;
pub use student::*;
pub use errors::*;
