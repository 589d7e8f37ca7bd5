pub mod job;
pub mod resume;

pub use job::*;
pub use resume::*;
