pub mod teachers;
