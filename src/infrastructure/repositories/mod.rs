pub mod mock;
pub mod teachers;
