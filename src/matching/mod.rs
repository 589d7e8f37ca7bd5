pub mod catalog;
pub mod engine;
pub mod parser;

pub use engine::SkillMatchEngine;
