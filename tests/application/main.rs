#[path = "../common/mod.rs"]
#[macro_use]
pub mod common;

pub mod teachers_service_test;
