pub mod engine;

pub use engine::MasteryEngine;
